use crate::models::{Complexity, Difficulty, Project};

const TECHNOLOGIES: &[&str] = &["C++", "STL", "Algorithms"];

pub(in crate::catalog) static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Sorting Algorithms",
        description: "Comprehensive implementation of various sorting algorithms including Bubble Sort, Quick Sort, Merge Sort, and Heap Sort with performance analysis.",
        difficulty: Difficulty::Intermediate,
        category: Some("Sorting"),
        duration: None,
        features: &[
            "Multiple sorting implementations",
            "Performance comparison",
            "Visualization helpers",
            "Custom input handling",
            "Array generators",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Comparison-based sorting", "Divide and conquer", "In-place sorting", "Stable sorting"],
        source_url: Some("https://github.com/TheAlgorithms/C-Plus-Plus/tree/master/sorting"),
        icon: "🔄",
        complexity: Some(Complexity {
            time: "O(n log n) - O(n²)",
            space: "O(1) - O(n)",
        }),
        download_codes: &["DAA_SORT_2024", "SORT_ADV_101", "ALGO_SORT_24"],
    },
    Project {
        id: 2,
        title: "Searching Algorithms",
        description: "Collection of searching algorithms including Binary Search, Linear Search, Jump Search, and Interpolation Search with complexity analysis.",
        difficulty: Difficulty::Beginner,
        category: Some("Searching"),
        duration: None,
        features: &[
            "Multiple search techniques",
            "Iterative and recursive implementations",
            "Performance metrics",
            "Test case generator",
            "Visualization tools",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Binary search", "Sequential search", "Jump search", "Interpolation search"],
        source_url: Some("https://github.com/TheAlgorithms/C-Plus-Plus/tree/master/search"),
        icon: "🔍",
        complexity: Some(Complexity {
            time: "O(1) - O(n)",
            space: "O(1)",
        }),
        download_codes: &["DAA_SEARCH_2024", "SEARCH_ADV_102", "ALGO_SEARCH_24"],
    },
    Project {
        id: 3,
        title: "Dynamic Programming",
        description: "Advanced dynamic programming solutions including Knapsack, LCS, Matrix Chain Multiplication, and Fibonacci with memoization.",
        difficulty: Difficulty::Advanced,
        category: Some("Dynamic Programming"),
        duration: None,
        features: &[
            "Memoization techniques",
            "Tabulation methods",
            "Space optimization",
            "Problem variations",
            "Performance analysis",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Optimal substructure", "Overlapping subproblems", "State transitions", "Space optimization"],
        source_url: Some("https://github.com/TheAlgorithms/C-Plus-Plus/tree/master/dynamic_programming"),
        icon: "📊",
        complexity: Some(Complexity {
            time: "Problem specific",
            space: "O(n) - O(n²)",
        }),
        download_codes: &["DAA_DP_2024", "DP_ADV_103", "ALGO_DP_24"],
    },
    Project {
        id: 4,
        title: "Graph Algorithms",
        description: "Implementation of graph algorithms including DFS, BFS, Dijkstra's, and Bellman-Ford with practical applications.",
        difficulty: Difficulty::Advanced,
        category: Some("Graph Algorithms"),
        duration: None,
        features: &[
            "Multiple graph representations",
            "Path finding algorithms",
            "Cycle detection",
            "Topological sorting",
            "MST algorithms",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Graph traversal", "Shortest paths", "Minimum spanning trees", "Network flow"],
        source_url: Some("https://github.com/TheAlgorithms/C-Plus-Plus/tree/master/graph"),
        icon: "🕸️",
        complexity: Some(Complexity {
            time: "O(V + E) - O(V²)",
            space: "O(V + E)",
        }),
        download_codes: &["DAA_GRAPH_2024", "GRAPH_ADV_104", "ALGO_GRAPH_24"],
    },
    Project {
        id: 5,
        title: "Greedy Algorithms",
        description: "Collection of greedy algorithms including Activity Selection, Huffman Coding, and Fractional Knapsack.",
        difficulty: Difficulty::Intermediate,
        category: Some("Greedy Algorithms"),
        duration: None,
        features: &[
            "Multiple problem solutions",
            "Optimization techniques",
            "Proof of correctness",
            "Comparative analysis",
            "Test cases",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Local optimization", "Global optimization", "Activity scheduling", "Huffman coding"],
        source_url: Some("https://github.com/TheAlgorithms/C-Plus-Plus/tree/master/greedy_algorithms"),
        icon: "💡",
        complexity: Some(Complexity {
            time: "O(n log n)",
            space: "O(n)",
        }),
        download_codes: &["DAA_GREEDY_2024", "GREEDY_ADV_105", "ALGO_GREEDY_24"],
    },
    Project {
        id: 6,
        title: "Backtracking Algorithms",
        description: "Implementation of backtracking algorithms including N-Queens, Sudoku Solver, and Hamiltonian Path with visualization.",
        difficulty: Difficulty::Advanced,
        category: Some("Backtracking"),
        duration: None,
        features: &[
            "Multiple problem solutions",
            "Visualization tools",
            "Step-by-step execution",
            "Performance analysis",
            "Test case generator",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["State space tree", "Constraint satisfaction", "Pruning techniques", "Solution verification"],
        source_url: Some("https://github.com/TheAlgorithms/C-Plus-Plus/tree/master/backtracking"),
        icon: "🧩",
        complexity: Some(Complexity {
            time: "O(b^d)",
            space: "O(d)",
        }),
        download_codes: &["DAA_BACK_2024", "BACK_ADV_106", "ALGO_BACK_24"],
    },
    Project {
        id: 7,
        title: "String Algorithms",
        description: "Collection of string manipulation algorithms including Pattern Matching, String Hashing, and Suffix Arrays.",
        difficulty: Difficulty::Intermediate,
        category: Some("String Algorithms"),
        duration: None,
        features: &[
            "Pattern matching",
            "String hashing",
            "Suffix structures",
            "Text processing",
            "Performance metrics",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Pattern matching", "String hashing", "Suffix arrays", "Text processing"],
        source_url: Some("https://github.com/TheAlgorithms/C-Plus-Plus/tree/master/strings"),
        icon: "📝",
        complexity: Some(Complexity {
            time: "O(n + m)",
            space: "O(n)",
        }),
        download_codes: &["DAA_STR_2024", "STR_ADV_107", "ALGO_STR_24"],
    },
    Project {
        id: 8,
        title: "Number Theory",
        description: "Advanced number theory algorithms including Prime Generation, GCD, Extended Euclidean, and Modular Arithmetic.",
        difficulty: Difficulty::Advanced,
        category: Some("Number Theory"),
        duration: None,
        features: &[
            "Prime number operations",
            "GCD calculations",
            "Modular arithmetic",
            "Number properties",
            "Optimization techniques",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Prime numbers", "GCD and LCM", "Modular arithmetic", "Number properties"],
        source_url: Some("https://github.com/TheAlgorithms/C-Plus-Plus/tree/master/math"),
        icon: "🔢",
        complexity: Some(Complexity {
            time: "O(log n) - O(n log log n)",
            space: "O(1) - O(n)",
        }),
        download_codes: &["DAA_NUM_2024", "NUM_ADV_108", "ALGO_NUM_24"],
    },
    Project {
        id: 9,
        title: "Geometric Algorithms",
        description: "Implementation of geometric algorithms including Convex Hull, Line Intersection, and Point Location.",
        difficulty: Difficulty::Advanced,
        category: Some("Geometric Algorithms"),
        duration: None,
        features: &[
            "Geometric calculations",
            "Shape processing",
            "Intersection detection",
            "Area computation",
            "Visualization tools",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Convex hull", "Line intersection", "Point location", "Geometric primitives"],
        source_url: Some("https://github.com/TheAlgorithms/C-Plus-Plus/tree/master/geometry"),
        icon: "📐",
        complexity: Some(Complexity {
            time: "O(n log n)",
            space: "O(n)",
        }),
        download_codes: &["DAA_GEO_2024", "GEO_ADV_109", "ALGO_GEO_24"],
    },
    Project {
        id: 10,
        title: "Machine Learning Algorithms",
        description: "Basic machine learning algorithms implemented from scratch including Linear Regression, K-Means, and Neural Networks.",
        difficulty: Difficulty::Advanced,
        category: Some("Machine Learning"),
        duration: None,
        features: &[
            "ML implementations",
            "Data preprocessing",
            "Model training",
            "Performance evaluation",
            "Visualization tools",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Linear regression", "Clustering", "Neural networks", "Model evaluation"],
        source_url: Some("https://github.com/TheAlgorithms/C-Plus-Plus/tree/master/machine_learning"),
        icon: "🤖",
        complexity: Some(Complexity {
            time: "Algorithm specific",
            space: "O(n) - O(n²)",
        }),
        download_codes: &["DAA_ML_2024", "ML_ADV_110", "ALGO_ML_24"],
    },
];
