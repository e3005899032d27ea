use crate::models::{Activity, DashboardStat, SidebarItem, SidebarLink, Trend};

pub(super) static SIDEBAR: &[SidebarItem] = &[
    SidebarItem {
        title: "Dashboard",
        icon: "📊",
        path: "/admin/dashboard",
        sub_items: &[],
    },
    SidebarItem {
        title: "Users",
        icon: "👥",
        path: "/admin/users",
        sub_items: &[],
    },
    SidebarItem {
        title: "Courses",
        icon: "📚",
        path: "/admin/courses",
        sub_items: &[
            SidebarLink { title: "All Courses", path: "/admin/courses" },
            SidebarLink { title: "Add Course", path: "/admin/courses/add" },
            SidebarLink { title: "Categories", path: "/admin/courses/categories" },
        ],
    },
    SidebarItem {
        title: "Projects",
        icon: "🎯",
        path: "/admin/projects",
        sub_items: &[
            SidebarLink { title: "All Projects", path: "/admin/projects" },
            SidebarLink { title: "Add Project", path: "/admin/projects/add" },
            SidebarLink { title: "Categories", path: "/admin/projects/categories" },
        ],
    },
    SidebarItem {
        title: "Resources",
        icon: "📝",
        path: "/admin/resources",
        sub_items: &[
            SidebarLink { title: "Blog Posts", path: "/admin/resources/blog" },
            SidebarLink { title: "Tutorials", path: "/admin/resources/tutorials" },
            SidebarLink { title: "Events", path: "/admin/resources/events" },
        ],
    },
    SidebarItem {
        title: "Analytics",
        icon: "📈",
        path: "/admin/analytics",
        sub_items: &[],
    },
    SidebarItem {
        title: "Settings",
        icon: "⚙️",
        path: "/admin/settings",
        sub_items: &[],
    },
];

pub(super) static STATS: &[DashboardStat] = &[
    DashboardStat {
        title: "Total Users",
        value: "2,543",
        change: "+12.5%",
        trend: Trend::Increase,
        icon: "👥",
    },
    DashboardStat {
        title: "Active Courses",
        value: "45",
        change: "+3.2%",
        trend: Trend::Increase,
        icon: "📚",
    },
    DashboardStat {
        title: "Total Projects",
        value: "128",
        change: "+28.4%",
        trend: Trend::Increase,
        icon: "🎯",
    },
    DashboardStat {
        title: "Resources",
        value: "326",
        change: "+8.7%",
        trend: Trend::Increase,
        icon: "📝",
    },
];

pub(super) static ACTIVITY: &[Activity] = &[
    Activity {
        user: "John Doe",
        action: "enrolled in",
        target: "Python Programming Course",
        minutes_ago: 2,
        icon: "🐍",
    },
    Activity {
        user: "Jane Smith",
        action: "completed",
        target: "Java Development Project",
        minutes_ago: 15,
        icon: "☕",
    },
    Activity {
        user: "Mike Johnson",
        action: "submitted",
        target: "C++ Assignment",
        minutes_ago: 60,
        icon: "⚡",
    },
    Activity {
        user: "Sarah Wilson",
        action: "started",
        target: "Web Development Course",
        minutes_ago: 120,
        icon: "🌐",
    },
];
