use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SidebarItem {
    pub title: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
    pub sub_items: &'static [SidebarLink],
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarLink {
    pub title: &'static str,
    pub path: &'static str,
}

impl SidebarItem {
    /// True when `path` is this item or one of its sub-items
    pub fn owns(&self, path: &str) -> bool {
        self.path == path || self.sub_items.iter().any(|s| s.path == path)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increase,
    Decrease,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    pub icon: &'static str,
}

impl DashboardStat {
    pub fn is_increase(&self) -> bool {
        self.trend == Trend::Increase
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub user: &'static str,
    pub action: &'static str,
    pub target: &'static str,
    pub minutes_ago: u32,
    pub icon: &'static str,
}

impl Activity {
    pub fn time_ago(&self) -> String {
        let (n, unit) = match self.minutes_ago {
            m if m < 60 => (m, "minute"),
            m if m < 60 * 24 => (m / 60, "hour"),
            m => (m / (60 * 24), "day"),
        };
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(minutes_ago: u32) -> Activity {
        Activity {
            user: "Jane Smith",
            action: "completed",
            target: "Java Development Project",
            minutes_ago,
            icon: "☕",
        }
    }

    #[test]
    fn test_activity_time_ago_units() {
        assert_eq!(activity(2).time_ago(), "2 minutes ago");
        assert_eq!(activity(60).time_ago(), "1 hour ago");
        assert_eq!(activity(150).time_ago(), "2 hours ago");
        assert_eq!(activity(60 * 24 * 3).time_ago(), "3 days ago");
    }

    #[test]
    fn test_sidebar_item_owns_sub_paths() {
        static SUBS: [SidebarLink; 1] = [SidebarLink {
            title: "Add Course",
            path: "/admin/courses/add",
        }];
        let item = SidebarItem {
            title: "Courses",
            icon: "📚",
            path: "/admin/courses",
            sub_items: &SUBS,
        };

        assert!(item.owns("/admin/courses"));
        assert!(item.owns("/admin/courses/add"));
        assert!(!item.owns("/admin/projects"));
    }
}
