use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// Simple in-memory rate limiter
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Vec<SystemTime>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Check if request should be allowed
    /// Returns true if allowed, false if rate limit exceeded
    pub fn check_rate_limit(&self, key: &str, max_requests: usize, window: Duration) -> bool {
        let now = SystemTime::now();
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Drop timestamps outside the window for every key, then keys left empty
        let in_window =
            |time: &SystemTime| now.duration_since(*time).unwrap_or(Duration::from_secs(0)) < window;
        for times in requests.values_mut() {
            times.retain(in_window);
        }
        requests.retain(|_, times| !times.is_empty());

        let entry = requests.entry(key.to_string()).or_default();
        if entry.len() >= max_requests {
            return false;
        }

        entry.push(now);
        true
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Only same-site absolute paths may be echoed back as a redirect target
pub fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_per_key() {
        let limiter = RateLimiter::new();
        let window = Duration::from_secs(60);

        assert!(limiter.check_rate_limit("download:1.2.3.4", 2, window));
        assert!(limiter.check_rate_limit("download:1.2.3.4", 2, window));
        assert!(!limiter.check_rate_limit("download:1.2.3.4", 2, window));
        assert!(limiter.check_rate_limit("download:5.6.7.8", 2, window));
    }

    #[test]
    fn test_expired_keys_are_dropped() {
        let limiter = RateLimiter::new();
        let window = Duration::from_millis(20);

        for i in 0..5 {
            assert!(limiter.check_rate_limit(&format!("download:10.0.0.{i}"), 10, window));
        }
        assert_eq!(limiter.tracked_keys(), 5);

        std::thread::sleep(Duration::from_millis(40));
        assert!(limiter.check_rate_limit("download:10.0.0.99", 10, window));
        assert_eq!(limiter.tracked_keys(), 1);
    }

    #[test]
    fn test_local_paths() {
        assert!(is_local_path("/admin/dashboard"));
        assert!(!is_local_path("https://evil.example"));
        assert!(!is_local_path("//evil.example"));
        assert!(!is_local_path("/\\evil.example"));
        assert!(!is_local_path("admin"));
    }
}
