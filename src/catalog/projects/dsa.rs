use crate::models::{Difficulty, Project};

macro_rules! source {
    ($dir:literal) => {
        Some(concat!(
            "https://github.com/TheAlgorithms/C-Plus-Plus/tree/master/data_structures/",
            $dir
        ))
    };
}

const TECHNOLOGIES: &[&str] = &["C++", "Templates", "Pointers"];

pub(in crate::catalog) static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Array Operations Library",
        description: "Comprehensive C++ library for array operations including sorting, searching, and dynamic array implementation using pointers.",
        difficulty: Difficulty::Beginner,
        category: Some("array"),
        duration: None,
        features: &[
            "Dynamic Array Implementation",
            "Binary Search",
            "Bubble, Selection, Insertion Sorts",
            "Array Rotation",
            "Subarray Operations",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Pointer Arithmetic", "Memory Allocation", "Template Classes", "Iterator Pattern", "Exception Handling"],
        source_url: source!("array"),
        icon: "📊",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 2,
        title: "Stack Implementation",
        description: "Stack data structure implementation with templates and dynamic memory allocation using pointers.",
        difficulty: Difficulty::Intermediate,
        category: Some("stack"),
        duration: None,
        features: &[
            "Template Stack Class",
            "Dynamic Size Management",
            "Push/Pop Operations",
            "Stack Overflow Protection",
            "Exception Safety",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["LIFO Principle", "Dynamic Memory", "Template Programming", "Copy Semantics", "Move Semantics"],
        source_url: source!("stack"),
        icon: "📚",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 3,
        title: "Queue Data Structure",
        description: "Queue implementation with circular buffer and dynamic resizing using pointer manipulation.",
        difficulty: Difficulty::Intermediate,
        category: Some("queue"),
        duration: None,
        features: &[
            "Circular Queue",
            "Dynamic Resizing",
            "Priority Queue",
            "Double-ended Queue",
            "Thread Safety",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["FIFO Principle", "Circular Buffer", "Dynamic Memory", "Thread Safety", "Iterator Design"],
        source_url: source!("queue"),
        icon: "🔄",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 4,
        title: "Linked List Collection",
        description: "Comprehensive linked list implementations including singly, doubly, and circular linked lists using pointers.",
        difficulty: Difficulty::Intermediate,
        category: Some("linked_list"),
        duration: None,
        features: &[
            "Singly Linked List",
            "Doubly Linked List",
            "Circular Linked List",
            "Merge Operations",
            "Cycle Detection",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Pointer Manipulation", "Memory Management", "Node Structures", "List Traversal", "Cycle Handling"],
        source_url: source!("linked_list"),
        icon: "🔗",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 5,
        title: "Binary Search Tree",
        description: "Binary search tree implementation with balancing and traversal algorithms using pointer-based nodes.",
        difficulty: Difficulty::Advanced,
        category: Some("tree"),
        duration: None,
        features: &[
            "BST Operations",
            "Tree Balancing",
            "Tree Traversals",
            "Height Calculation",
            "Serialization",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Tree Structures", "Recursive Operations", "Balancing Algorithms", "Memory Management", "Iterator Pattern"],
        source_url: source!("binary_search_tree"),
        icon: "🌳",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 6,
        title: "AVL Tree Implementation",
        description: "Self-balancing AVL tree implementation with automatic rebalancing and traversal algorithms using pointer manipulation.",
        difficulty: Difficulty::Advanced,
        category: Some("tree"),
        duration: None,
        features: &[
            "AVL Tree Operations",
            "Auto-balancing Logic",
            "Tree Rotations",
            "Height Balancing",
            "Node Deletion",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Tree Balancing", "Rotation Algorithms", "Height Calculation", "Memory Management", "Recursive Operations"],
        source_url: source!("avl_tree"),
        icon: "🌲",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 7,
        title: "Hash Table Implementation",
        description: "Hash table implementation with collision resolution using chaining and open addressing techniques.",
        difficulty: Difficulty::Intermediate,
        category: Some("hash"),
        duration: None,
        features: &[
            "Hash Functions",
            "Collision Resolution",
            "Dynamic Resizing",
            "Chaining Method",
            "Open Addressing",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Hashing Techniques", "Collision Handling", "Dynamic Memory", "Load Balancing", "Iterator Design"],
        source_url: source!("hash_table"),
        icon: "🔑",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 8,
        title: "Heap Data Structure",
        description: "Binary heap implementation with min and max heap variants using array-based representation.",
        difficulty: Difficulty::Intermediate,
        category: Some("heap"),
        duration: None,
        features: &[
            "Min/Max Heap",
            "Heapify Operations",
            "Priority Queue",
            "Array Implementation",
            "Heap Sort",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Heap Property", "Array Representation", "Priority Queues", "Sorting Algorithms", "Complete Trees"],
        source_url: source!("heap"),
        icon: "📊",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 9,
        title: "Trie Data Structure",
        description: "Trie implementation for efficient string operations and prefix matching using pointer-based nodes.",
        difficulty: Difficulty::Advanced,
        category: Some("trie"),
        duration: None,
        features: &[
            "String Operations",
            "Prefix Matching",
            "Word Insertion",
            "Pattern Search",
            "Deletion Support",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Tree Structures", "String Processing", "Pattern Matching", "Memory Management", "Character Arrays"],
        source_url: source!("trie"),
        icon: "📝",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 10,
        title: "Graph Data Structure",
        description: "Graph implementation with adjacency list and matrix representations using pointer-based structures.",
        difficulty: Difficulty::Advanced,
        category: Some("graph"),
        duration: None,
        features: &[
            "Graph Representations",
            "DFS/BFS Traversal",
            "Shortest Path",
            "Connected Components",
            "Cycle Detection",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Graph Theory", "Adjacency Lists", "Matrix Operations", "Path Finding", "Memory Efficiency"],
        source_url: source!("graph"),
        icon: "🕸️",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 11,
        title: "Red-Black Tree",
        description: "Self-balancing red-black tree implementation with color-based balancing using pointer manipulation.",
        difficulty: Difficulty::Advanced,
        category: Some("tree"),
        duration: None,
        features: &[
            "Color Properties",
            "Tree Rotations",
            "Balancing Rules",
            "Insertion/Deletion",
            "Balance Verification",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Color Properties", "Tree Balancing", "Rotation Logic", "Memory Management", "Tree Invariants"],
        source_url: source!("red_black_tree"),
        icon: "🔴",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 12,
        title: "Skip List",
        description: "Probabilistic data structure implementation with multiple layers for faster search operations.",
        difficulty: Difficulty::Advanced,
        category: Some("list"),
        duration: None,
        features: &[
            "Multi-level Structure",
            "Probabilistic Balance",
            "Fast Search",
            "Dynamic Insertion",
            "Performance Analysis",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Probabilistic DS", "Multi-level Design", "Search Optimization", "Memory Management", "Performance Tuning"],
        source_url: source!("skip_list"),
        icon: "⚡",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 13,
        title: "B-Tree Implementation",
        description: "Multi-way search tree implementation optimized for disk operations and large datasets.",
        difficulty: Difficulty::Advanced,
        category: Some("tree"),
        duration: None,
        features: &[
            "Multi-way Nodes",
            "Disk I/O Optimization",
            "Split Operations",
            "Merge Operations",
            "Large Dataset Handling",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Multi-way Trees", "Disk Operations", "Balance Maintenance", "Memory Management", "Search Algorithms"],
        source_url: source!("b_tree"),
        icon: "💾",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 14,
        title: "Segment Tree",
        description: "Efficient tree data structure for range queries and updates using array representation.",
        difficulty: Difficulty::Intermediate,
        category: Some("tree"),
        duration: None,
        features: &[
            "Range Queries",
            "Lazy Propagation",
            "Array Representation",
            "Update Operations",
            "Range Updates",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Range Operations", "Tree Structure", "Lazy Updates", "Memory Management", "Query Processing"],
        source_url: source!("segment_tree"),
        icon: "📊",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 15,
        title: "Disjoint Set",
        description: "Union-find data structure implementation with path compression and union by rank.",
        difficulty: Difficulty::Intermediate,
        category: Some("set"),
        duration: None,
        features: &[
            "Union Operations",
            "Find Operations",
            "Path Compression",
            "Rank Optimization",
            "Component Tracking",
        ],
        technologies: TECHNOLOGIES,
        concepts: &["Set Operations", "Path Compression", "Union by Rank", "Memory Management", "Performance Analysis"],
        source_url: source!("disjoint_set"),
        icon: "🔗",
        complexity: None,
        download_codes: &[],
    },
];
