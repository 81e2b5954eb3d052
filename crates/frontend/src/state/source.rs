//! Where a collection's data actually came from at load time.
//!
//! The fallback order is fixed: a successful remote fetch wins, then a
//! local-storage snapshot, then the hardcoded default dataset. Modeled as an
//! explicit type so the cascade is testable without a browser.

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource<T> {
    Remote(T),
    Cached(T),
    Default(T),
}

impl<T> DataSource<T> {
    pub fn into_inner(self) -> T {
        match self {
            DataSource::Remote(v) | DataSource::Cached(v) | DataSource::Default(v) => v,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, DataSource::Remote(_))
    }
}

/// The single selection point for the remote → cached → default cascade.
pub fn select<T>(remote: Result<T, String>, cached: Option<T>, default: T) -> DataSource<T> {
    match remote {
        Ok(data) => DataSource::Remote(data),
        Err(_) => match cached {
            Some(data) => DataSource::Cached(data),
            None => DataSource::Default(default),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_wins_even_with_cache_present() {
        let source = select(Ok(vec![1]), Some(vec![2]), vec![3]);
        assert_eq!(source, DataSource::Remote(vec![1]));
    }

    #[test]
    fn cache_used_when_remote_fails() {
        let source = select(Err("down".into()), Some(vec![2]), vec![3]);
        assert_eq!(source, DataSource::Cached(vec![2]));
    }

    #[test]
    fn default_used_when_nothing_else_exists() {
        let source = select::<Vec<i32>>(Err("down".into()), None, vec![3]);
        assert_eq!(source, DataSource::Default(vec![3]));
        assert!(!source.is_remote());
    }
}
