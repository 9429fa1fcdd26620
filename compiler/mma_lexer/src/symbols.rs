//! Static lookup tables for the target language.
//!
//! These are plain data. [`SymbolTables`](crate::SymbolTables) copies them
//! into owned sets at construction, so callers can extend or replace any
//! table without touching this module.
//!
//! Tables searched with binary search are kept sorted; the unit tests
//! enforce it.

/// Symbols that open a lexical scope when followed by `[`.
pub const SCOPING_KEYWORDS: &[&str] = &["Block", "Module", "With"];

/// Names in the `System` context, sorted by code point.
///
/// A representative subset, not the full `System` list: many plotting and
/// distribution names are missing and lex as plain symbols. Add more with
/// [`SymbolTables::with_builtin`](crate::SymbolTables::with_builtin).
pub const SYSTEM_SYMBOLS: &[&str] = &[
    "$Aborted", "$Assumptions", "$Context", "$ContextPath", "$DateStringFormat", "$Failed",
    "$HistoryLength", "$InputFileName", "$Line", "$MachineEpsilon", "$MachinePrecision",
    "$MaxExtraPrecision", "$MaxMachineNumber", "$MinMachineNumber", "$ModuleNumber",
    "$OperatingSystem", "$Packages", "$Path", "$RecursionLimit", "$SystemID", "$TimeZone",
    "$Version", "$VersionNumber", "Abort", "AbortProtect", "Abs", "AbsoluteDashing",
    "AbsoluteThickness", "AbsoluteTime", "AbsoluteTiming", "Accumulate", "Accuracy",
    "AccuracyGoal", "AddTo", "AdjacencyMatrix", "AiryAi", "AiryBi", "Algebraics", "All",
    "Alternatives", "And", "Animate", "Annotation", "Antisymmetric", "Append", "AppendTo",
    "Apply", "ArcCos", "ArcCosh", "ArcCot", "ArcCsc", "ArcSec", "ArcSin", "ArcSinh", "ArcTan",
    "ArcTanh", "Arg", "Array", "ArrayDepth", "ArrayFlatten", "ArrayPad", "ArrayPlot", "ArrayQ",
    "ArrayReshape", "Arrow", "Arrowheads", "AspectRatio", "Assert", "Association",
    "AssociationMap", "AssociationQ", "AssociationThread", "Assuming", "Assumptions", "AtomQ",
    "Attributes", "Automatic", "Axes", "AxesLabel", "AxesOrigin", "AxesStyle", "Background",
    "BarChart", "Begin", "BeginPackage", "BernoulliB", "BesselI", "BesselJ", "BesselK",
    "BesselY", "Beta", "BinCounts", "Binarize", "BinaryReadList", "BinaryWrite", "Binomial",
    "BitAnd", "BitLength", "BitOr", "BitShiftLeft", "BitShiftRight", "BitXor", "Black",
    "Blank", "BlankNullSequence", "BlankSequence", "Blend", "Block", "Blue", "Bold", "Boole",
    "BooleanTable", "Booleans", "Bottom", "BoxRatios", "Break", "Button", "Cancel", "Cases",
    "Catalan", "Catch", "Ceiling", "CellPrint", "Center", "CharacterRange", "Characters",
    "ChebyshevT", "ChebyshevU", "Check", "CheckAbort", "Chop", "Circle", "Clear", "ClearAll",
    "ClearAttributes", "Clip", "ColorData", "ColorFunction", "Column", "Compile", "Compiled",
    "CompiledFunction", "Complement", "Complex", "ComplexExpand", "ComplexInfinity",
    "Complexes", "ComposeList", "Composition", "CompoundExpression", "Condition", "Conjugate",
    "Constant", "Constants", "Context", "Contexts", "Continue", "ContourPlot", "ContourPlot3D",
    "ConvexHullMesh", "CoordinateBounds", "Correlation", "Cos", "Cosh", "Cot", "Coth", "Count",
    "CountDistinct", "Counts", "Covariance", "CreateDirectory", "Cross", "Csc", "Cuboid",
    "Cyan", "Cylinder", "D", "DSolve", "DSolveValue", "Dashed", "Dashing", "DataRange",
    "Database", "Date", "DateList", "DateObject", "DateString", "Decrement", "Default",
    "Defer", "Definition", "Degree", "Delete", "DeleteCases", "DeleteDuplicates",
    "Denominator", "DensityPlot", "Depth", "Derivative", "Det", "DiagonalMatrix", "Dialog",
    "Dimensions", "DirectedEdge", "DirectedInfinity", "Directive", "Directory",
    "DirichletDistribution", "Discriminant", "Disk", "Dispatch", "Display", "Divide",
    "DivideBy", "Divisible", "Divisors", "Do", "Dot", "Drop", "Dynamic", "DynamicModule", "E",
    "EdgeLabels", "EdgeStyle", "Eigensystem", "Eigenvalues", "Eigenvectors", "Element",
    "Eliminate", "EllipticE", "EllipticK", "End", "EndPackage", "EngineeringForm", "Equal",
    "Equivalent", "Erf", "Erfc", "Error", "Evaluate", "Evaluation", "EvenQ", "Except",
    "Exists", "Exp", "ExpToTrig", "Expand", "ExpandAll", "Exponent", "Export", "Expression",
    "Extract", "Factor", "FactorInteger", "Factorial", "Factorial2", "False", "Fibonacci",
    "File", "FileNames", "Filling", "FillingStyle", "FindFit", "FindInstance", "FindMaximum",
    "FindMinimum", "FindRoot", "First", "FirstCase", "FirstPosition", "Fit", "FixedPoint",
    "FixedPointList", "Flat", "Flatten", "Floor", "Fold", "FoldList", "For", "ForAll",
    "FormBox", "Format", "Frame", "FrameLabel", "FrameStyle", "FrameTicks", "FreeQ",
    "FromCharacterCode", "FromDigits", "FullForm", "FullSimplify", "Function",
    "FunctionExpand", "GCD", "Gamma", "Gather", "GatherBy", "General", "GeoGraphics", "Get",
    "Global", "Goto", "Gradient", "Graph", "Graphics", "Graphics3D", "GraphicsColumn",
    "GraphicsGrid", "GraphicsRow", "Gray", "Greater", "GreaterEqual", "Green", "Grid",
    "GridLines", "GroupBy", "Head", "Heads", "Histogram", "Hold", "HoldAll", "HoldAllComplete",
    "HoldComplete", "HoldFirst", "HoldForm", "HoldPattern", "HoldRest", "Hue",
    "Hypergeometric2F1", "Hyperlink", "I", "Identity", "IdentityMatrix", "If", "IgnoreCase",
    "Im", "Image", "ImageData", "ImagePadding", "ImageSize", "Implies", "Import", "In",
    "Increment", "Indeterminate", "Infinity", "Infix", "Information", "Inner", "Input",
    "InputForm", "Insert", "Integer", "IntegerDigits", "IntegerPart", "IntegerQ", "Integers",
    "Integrate", "InterpolatingFunction", "Interpolation", "Intersection", "Interval",
    "Inverse", "InverseFunction", "Join", "Joined", "KeyDrop", "KeyExistsQ", "KeySelect",
    "KeySort", "KeyTake", "KeyValueMap", "Keys", "Kurtosis", "LCM", "LUDecomposition", "Label",
    "Labeled", "LaguerreL", "Large", "Last", "LeafCount", "Left", "Legended", "LegendreP",
    "Length", "Less", "LessEqual", "Level", "LightGray", "Lighter", "Limit", "Line",
    "LineLegend", "LinearSolve", "List", "ListAnimate", "ListContourPlot", "ListDensityPlot",
    "ListLinePlot", "ListLogPlot", "ListPlay", "ListPlot", "ListPlot3D", "Listable", "Locked",
    "Log", "Log10", "Log2", "LogLinearPlot", "LogLogPlot", "LogPlot", "Longest", "Lookup",
    "LowerCaseQ", "Magenta", "Manipulate", "Map", "MapAt", "MapIndexed", "MapThread", "MatchQ",
    "MatrixExp", "MatrixForm", "MatrixPower", "MatrixQ", "MatrixRank", "Max", "MaxIterations",
    "MaxRecursion", "Maximize", "Mean", "Median", "Medium", "MemberQ", "Merge", "Mesh",
    "MeshStyle", "Message", "MessageName", "Messages", "Method", "Min", "Minimize", "Minus",
    "Missing", "Mod", "Module", "Most", "Multinomial", "N", "NDSolve", "NDSolveValue",
    "NIntegrate", "NMaximize", "NMinimize", "NProduct", "NSolve", "NSum", "Needs", "Negative",
    "Nest", "NestList", "NestWhile", "NestWhileList", "NonNegative", "None", "Norm", "Normal",
    "NormalDistribution", "Normalize", "Not", "Nothing", "Null", "NullSpace", "NumberForm",
    "NumberQ", "Numerator", "NumericQ", "OddQ", "Off", "On", "OneIdentity", "Opacity",
    "OptionValue", "Optional", "Options", "OptionsPattern", "Or", "Orange", "Order",
    "Orderless", "Out", "Outer", "Overlay", "Pane", "ParallelMap", "ParallelTable",
    "Parallelize", "ParametricPlot", "ParametricPlot3D", "Part", "Partition", "Pattern",
    "PatternTest", "Pause", "Permutations", "Pi", "Piecewise", "Pink", "Play", "Plot",
    "Plot3D", "PlotLabel", "PlotLegends", "PlotMarkers", "PlotPoints", "PlotRange",
    "PlotStyle", "Plus", "Point", "PointSize", "PolarPlot", "PolyGamma", "PolyLog", "Polygon",
    "Polynomial", "PolynomialQ", "Position", "Positive", "Postfix", "Power", "PowerExpand",
    "PreDecrement", "PreIncrement", "Precision", "PrecisionGoal", "Prefix", "Prepend",
    "PrependTo", "Prime", "PrimeQ", "Primes", "Print", "PrintTemporary", "Product", "Protect",
    "Protected", "Purple", "QRDecomposition", "Quantile", "Quantity", "Quiet", "Quit",
    "Quotient", "RGBColor", "RandomChoice", "RandomComplex", "RandomInteger", "RandomReal",
    "RandomSample", "RandomVariate", "Range", "Rational", "Rationalize", "Rationals", "Re",
    "Read", "ReadList", "ReadProtected", "Real", "Reals", "Reap", "Record", "Rectangle", "Red",
    "Reduce", "Refine", "RegionPlot", "ReleaseHold", "Remove", "RenameFile", "Repeated",
    "RepeatedNull", "Replace", "ReplaceAll", "ReplacePart", "ReplaceRepeated", "Rescale",
    "Residue", "Resolve", "Rest", "Return", "Reverse", "Right", "RotationMatrix", "Round",
    "Row", "RowReduce", "Rule", "RuleDelayed", "Run", "Scaled", "Scan", "Sec", "Sech",
    "Select", "SelectFirst", "Sequence", "SequenceHold", "Series", "SeriesCoefficient", "Set",
    "SetAttributes", "SetDelayed", "SetDirectory", "SetOptions", "Shallow", "Short", "Show",
    "Sign", "Simplify", "Sin", "Sinc", "Sinh", "Skewness", "Slot", "SlotSequence", "Small",
    "Solve", "SolveValues", "Sort", "SortBy", "Sow", "Span", "Sphere", "Splice", "Split",
    "SplitBy", "Sqrt", "StandardDeviation", "StandardForm", "StringCases", "StringContainsQ",
    "StringDrop", "StringJoin", "StringLength", "StringMatchQ", "StringPosition", "StringQ",
    "StringReplace", "StringRiffle", "StringSplit", "StringTake", "StringTemplate",
    "StringTrim", "Style", "Subscript", "Subset", "SubsetQ", "Subsets", "Subtract",
    "SubtractFrom", "Sum", "Superscript", "Switch", "Symbol", "Symmetric", "SymmetricMatrixQ",
    "Syntax", "Table", "TableForm", "Tag", "TagSet", "TagSetDelayed", "Take", "TakeWhile",
    "Tally", "Tan", "Tanh", "TeXForm", "Text", "TextCell", "Thick", "Thickness", "Thin",
    "Thread", "Through", "Throw", "Ticks", "TimeConstrained", "Times", "TimesBy", "Timing",
    "ToCharacterCode", "ToExpression", "ToLowerCase", "ToString", "ToUpperCase", "Together",
    "Tooltip", "Top", "Total", "Tr", "TraditionalForm", "Transpose", "TreeForm", "TrigExpand",
    "TrigReduce", "True", "Tube", "Undefined", "Underscript", "Unequal", "Unevaluated",
    "Union", "Unique", "UnitStep", "Unprotect", "UnsameQ", "Unset", "Until", "UpSet",
    "UpSetDelayed", "UpTo", "UpValues", "UpperCaseQ", "ValueQ", "Values", "Variables",
    "Vector", "VectorPlot", "VectorQ", "Verbatim", "ViewPoint", "WeierstrassP", "Which",
    "While", "White", "With", "WolframAlpha", "Word", "Write", "WriteString", "Xor", "Yellow",
    "ZTransform", "Zeta",
];

/// Single-character builtins, sorted by code point.
pub const UNICODE_SYSTEM_SYMBOLS: &[char] = &[
    '\u{00B0}', // ° Degree Sign
    '\u{03C0}', // π Greek Small Letter Pi
    '\u{2147}', // ⅇ Double-Struck Italic Small E
    '\u{2148}', // ⅈ Double-Struck Italic Small I
    '\u{221E}', // ∞ Infinity
];

/// Single-character grouping delimiters, sorted by code point.
pub const UNICODE_GROUPINGS: &[char] = &[
    '\u{2308}', // ⌈ Left Ceiling
    '\u{2309}', // ⌉ Right Ceiling
    '\u{230A}', // ⌊ Left Floor
    '\u{230B}', // ⌋ Right Floor
    '\u{27E6}', // ⟦ Mathematical Left White Square Bracket
    '\u{27E7}', // ⟧ Mathematical Right White Square Bracket
    '\u{27E8}', // ⟨ Mathematical Left Angle Bracket
    '\u{27E9}', // ⟩ Mathematical Right Angle Bracket
    '\u{3008}', // 〈 Left Angle Bracket
    '\u{3009}', // 〉 Right Angle Bracket
    '\u{301A}', // 〚 Left White Square Bracket
    '\u{301B}', // 〛 Right White Square Bracket
];

/// Single-character operators, sorted by code point.
pub const UNICODE_OPERATORS: &[char] = &[
    '\u{00AC}', // ¬ Not Sign
    '\u{00B7}', // · Middle Dot
    '\u{00D7}', // × Multiplication Sign
    '\u{00F7}', // ÷ Division Sign
    '\u{2146}', // ⅆ Double-Struck Italic Small D
    '\u{2192}', // → Rightwards Arrow
    '\u{2194}', // ↔ Left Right Arrow
    '\u{21A6}', // ↦ Rightwards Arrow From Bar
    '\u{21D2}', // ⇒ Rightwards Double Arrow
    '\u{21D4}', // ⇔ Left Right Double Arrow
    '\u{2200}', // ∀ For All
    '\u{2203}', // ∃ There Exists
    '\u{2204}', // ∄ There Does Not Exist
    '\u{2206}', // ∆ Increment
    '\u{2207}', // ∇ Nabla
    '\u{2208}', // ∈ Element Of
    '\u{2209}', // ∉ Not An Element Of
    '\u{220F}', // ∏ N-Ary Product
    '\u{2211}', // ∑ N-Ary Summation
    '\u{2216}', // ∖ Set Minus
    '\u{2218}', // ∘ Ring Operator
    '\u{221A}', // √ Square Root
    '\u{221D}', // ∝ Proportional To
    '\u{2223}', // ∣ Divides
    '\u{2224}', // ∤ Does Not Divide
    '\u{2225}', // ∥ Parallel To
    '\u{2227}', // ∧ Logical And
    '\u{2228}', // ∨ Logical Or
    '\u{2229}', // ∩ Intersection
    '\u{222A}', // ∪ Union
    '\u{222B}', // ∫ Integral
    '\u{2248}', // ≈ Almost Equal To
    '\u{2260}', // ≠ Not Equal To
    '\u{2261}', // ≡ Identical To
    '\u{2264}', // ≤ Less-Than Or Equal To
    '\u{2265}', // ≥ Greater-Than Or Equal To
    '\u{2282}', // ⊂ Subset Of
    '\u{2283}', // ⊃ Superset Of
    '\u{2286}', // ⊆ Subset Of Or Equal To
    '\u{2287}', // ⊇ Superset Of Or Equal To
    '\u{2295}', // ⊕ Circled Plus
    '\u{2296}', // ⊖ Circled Minus
    '\u{2297}', // ⊗ Circled Times
    '\u{2299}', // ⊙ Circled Dot Operator
    '\u{22BB}', // ⊻ Xor
    '\u{22BC}', // ⊼ Nand
    '\u{22BD}', // ⊽ Nor
    '\u{22C2}', // ⋂ N-Ary Intersection
    '\u{22C3}', // ⋃ N-Ary Union
    '\u{22C6}', // ⋆ Star Operator
    '\u{27F5}', // ⟵ Long Leftwards Arrow
    '\u{27F6}', // ⟶ Long Rightwards Arrow
    '\u{29E6}', // ⧦ Gleich Stark
    '\u{29F4}', // ⧴ Rule-Delayed
];

/// Letter-like characters the system knows but leaves undefined, sorted by
/// code point.
pub const UNICODE_SYSTEM_UNDEFINED_SYMBOLS: &[char] = &[
    '\u{210B}', // ℋ Script Capital H
    '\u{210C}', // ℌ Black-Letter Capital H
    '\u{210D}', // ℍ Double-Struck Capital H
    '\u{210F}', // ℏ Planck Constant Over Two Pi
    '\u{2110}', // ℐ Script Capital I
    '\u{2111}', // ℑ Black-Letter Capital I
    '\u{2112}', // ℒ Script Capital L
    '\u{2113}', // ℓ Script Small L
    '\u{2115}', // ℕ Double-Struck Capital N
    '\u{2118}', // ℘ Script Capital P
    '\u{2119}', // ℙ Double-Struck Capital P
    '\u{211A}', // ℚ Double-Struck Capital Q
    '\u{211B}', // ℛ Script Capital R
    '\u{211C}', // ℜ Black-Letter Capital R
    '\u{211D}', // ℝ Double-Struck Capital R
    '\u{2124}', // ℤ Double-Struck Capital Z
    '\u{2128}', // ℨ Black-Letter Capital Z
    '\u{212C}', // ℬ Script Capital B
    '\u{212D}', // ℭ Black-Letter Capital C
    '\u{212F}', // ℯ Script Small E
    '\u{2130}', // ℰ Script Capital E
    '\u{2131}', // ℱ Script Capital F
    '\u{2133}', // ℳ Script Capital M
    '\u{2134}', // ℴ Script Small O
    '\u{2135}', // ℵ Alef Symbol
    '\u{2136}', // ℶ Bet Symbol
    '\u{2137}', // ℷ Gimel Symbol
    '\u{2138}', // ℸ Dalet Symbol
];

/// Grouping punctuation recognized directly by the root rule-set.
pub const GROUPINGS: &[&str] = &[
    "[", "]", "{", "}", "(", ")", "<|", "|>", ",",
    "\u{27E6}", "\u{27E7}", // ⟦ ⟧
    "\u{27E8}", "\u{27E9}", // ⟨ ⟩
    "\u{3008}", "\u{3009}", // 〈 〉
    "\u{301A}", "\u{301B}", // 〚 〛
];

/// Operators recognized directly by the root rule-set.
///
/// Order does not matter here: the grammar sorts every word list
/// longest-first before building its alternation, so `:=` always wins over
/// `:` and `=`.
pub const OPERATORS: &[&str] = &[
    // Three characters
    ">>>", "===", "=!=", "//.", "//@", "^:=", "@@@", "...", "___",
    // Two characters
    "::", "->", ":>", ":=", "^=", "/:", "/@", "/.", "/;", "//", "@@", "@*", "/*", "~~",
    "<>", "<<", ">>", "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=",
    "/=", "**", "..", ";;", "__", "_.", "%%", "??",
    // One character
    "'", "!", "?", "~", "&", "%", "^", "*", "/", "+", "-", "=", "<", ">", ".", ";", ":",
    "@", "|", "_",
    // Unicode
    "\u{00AC}", "\u{00D7}", "\u{00F7}", "\u{2192}", "\u{21A6}", "\u{21D2}",
    "\u{2208}", "\u{2209}", "\u{2227}", "\u{2228}", "\u{2229}", "\u{222A}",
    "\u{2260}", "\u{2261}", "\u{2264}", "\u{2265}", "\u{2282}", "\u{2283}",
    "\u{2295}", "\u{2297}", "\u{29E6}", "\u{29F4}",
];
