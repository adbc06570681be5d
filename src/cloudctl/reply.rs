//! # Replies: Results That Carry Warnings
//!
//! The platform attaches advisory warnings to responses, including failed
//! ones, and the user must see them either way. A plain `Result` would drop
//! them on the error path, so every call in the API and actor layers returns a
//! [`Reply`]: the result plus the warnings gathered while producing it.
//!
//! Operations built from several calls gather warnings with [`Reply::collect`]
//! and [`Reply::collect_into`], so a failure halfway through still reports the
//! warnings of the calls that ran:
//!
//! ```rust
//! use cloudctl::reply::Reply;
//!
//! fn first() -> Reply<u32, String> {
//!     Reply::ok(1, vec!["first warning".into()])
//! }
//!
//! fn second() -> Reply<u32, String> {
//!     Reply::err("boom".into(), vec!["second warning".into()])
//! }
//!
//! let reply: Reply<u32, String> = Reply::collect(|warnings| {
//!     let a = first().collect_into(warnings)?;
//!     let b = second().collect_into(warnings)?;
//!     Ok(a + b)
//! });
//!
//! assert!(reply.result.is_err());
//! assert_eq!(reply.warnings, vec!["first warning", "second warning"]);
//! ```

use crate::model::Warnings;

#[derive(Debug)]
#[must_use]
pub struct Reply<T, E> {
    pub result: Result<T, E>,
    pub warnings: Warnings,
}

impl<T, E> Reply<T, E> {
    pub fn new(result: Result<T, E>, warnings: Warnings) -> Self {
        Self { result, warnings }
    }

    pub fn ok(value: T, warnings: Warnings) -> Self {
        Self::new(Ok(value), warnings)
    }

    pub fn err(error: E, warnings: Warnings) -> Self {
        Self::new(Err(error), warnings)
    }

    /// Runs `f` with an empty warning sink and packs whatever it gathered
    /// alongside its result.
    pub fn collect<F>(f: F) -> Self
    where
        F: FnOnce(&mut Warnings) -> Result<T, E>,
    {
        let mut warnings = Warnings::new();
        let result = f(&mut warnings);
        Self { result, warnings }
    }

    /// Moves the warnings into `sink` and returns the bare result.
    pub fn collect_into(self, sink: &mut Warnings) -> Result<T, E> {
        sink.extend(self.warnings);
        self.result
    }

    pub fn into_parts(self) -> (Result<T, E>, Warnings) {
        (self.result, self.warnings)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Reply<U, E> {
        Reply::new(self.result.map(f), self.warnings)
    }

    pub fn map_err<G, F: FnOnce(E) -> G>(self, f: F) -> Reply<T, G> {
        Reply::new(self.result.map_err(f), self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_keeps_warnings_on_failure() {
        let reply: Reply<(), &str> = Reply::collect(|warnings| {
            Reply::<(), &str>::ok((), vec!["one".into()]).collect_into(warnings)?;
            Reply::<(), &str>::err("stop", vec!["two".into()]).collect_into(warnings)?;
            Reply::<(), &str>::ok((), vec!["never".into()]).collect_into(warnings)
        });

        assert_eq!(reply.result, Err("stop"));
        assert_eq!(reply.warnings, vec!["one", "two"]);
    }

    #[test]
    fn test_map_and_map_err_preserve_warnings() {
        let mapped = Reply::<u8, &str>::ok(2, vec!["w".into()]).map(|n| n * 2);
        assert_eq!(mapped.result, Ok(4));
        assert_eq!(mapped.warnings, vec!["w"]);

        let failed = Reply::<u8, &str>::err("e", vec!["w".into()]).map_err(str::len);
        let (result, warnings) = failed.into_parts();
        assert_eq!(result, Err(1));
        assert_eq!(warnings, vec!["w"]);
    }
}
