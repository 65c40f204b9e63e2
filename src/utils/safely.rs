// Failure boundaries for user code: section bodies and interceptor callbacks

use anyhow::{Result, anyhow};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Run `f`, turning both a returned error and an unwinding panic into `Err`.
///
/// Panics that abort the process cannot be caught here.
pub fn call_safely<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(anyhow!("panicked: {}", panic_message(payload.as_ref()))),
    }
}

/// Call `f` on every item in order, routing each failure to `on_failure`
/// together with the index of the item that failed.
///
/// A failing item never stops the iteration.
pub fn for_each_safely<T, F, E>(items: &[T], mut on_failure: E, mut f: F)
where
    F: FnMut(&T) -> Result<()>,
    E: FnMut(usize, &T, anyhow::Error),
{
    for (index, item) in items.iter().enumerate() {
        if let Err(error) = call_safely(|| f(item)) {
            on_failure(index, item, error);
        }
    }
}

/// Extract a readable message from a panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_safely_ok() {
        let result = call_safely(|| Ok(42));
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_call_safely_error() {
        let result: Result<()> = call_safely(|| Err(anyhow!("boom")));
        assert_eq!(result.unwrap_err().to_string(), "boom");
    }

    #[test]
    fn test_call_safely_panic() {
        let result: Result<()> = call_safely(|| panic!("assertion went wrong"));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("panicked"));
        assert!(message.contains("assertion went wrong"));
    }

    #[test]
    fn test_call_safely_formatted_panic() {
        let value = 7;
        let result: Result<()> = call_safely(|| panic!("bad value {}", value));
        assert!(result.unwrap_err().to_string().contains("bad value 7"));
    }

    #[test]
    fn test_for_each_safely_continues_after_failure() {
        let items = vec![1, 2, 3, 4];
        let mut visited = Vec::new();
        let mut failures = Vec::new();

        for_each_safely(
            &items,
            |index, item, error| failures.push((index, *item, error.to_string())),
            |item| {
                visited.push(*item);
                match item {
                    2 => Err(anyhow!("two failed")),
                    3 => panic!("three panicked"),
                    _ => Ok(()),
                }
            },
        );

        assert_eq!(visited, vec![1, 2, 3, 4]);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].0, 1);
        assert_eq!(failures[0].2, "two failed");
        assert_eq!(failures[1].0, 2);
        assert!(failures[1].2.contains("three panicked"));
    }

    #[test]
    fn test_for_each_safely_empty() {
        let items: Vec<u8> = Vec::new();
        let mut calls = 0;
        for_each_safely(&items, |_, _, _| calls += 1, |_| Ok(()));
        assert_eq!(calls, 0);
    }
}
