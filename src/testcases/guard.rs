// Detection of test cases started while another one is running on the same thread

use std::cell::RefCell;

use crate::configurator::ConfigError;

thread_local! {
    static ACTIVE_TEST_CASE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Fails with [`ConfigError::NestedTestCase`] when a test case is already running
pub fn ensure_idle(test_case_name: &str) -> Result<(), ConfigError> {
    ACTIVE_TEST_CASE.with(|active| match active.borrow().as_ref() {
        Some(outer) => Err(ConfigError::NestedTestCase {
            outer: outer.clone(),
            inner: test_case_name.to_string(),
        }),
        None => Ok(()),
    })
}

/// Marks a test case as running on the current thread until dropped
#[derive(Debug)]
pub struct ActiveTestCase {
    _private: (),
}

impl ActiveTestCase {
    pub fn enter(test_case_name: &str) -> Result<Self, ConfigError> {
        ensure_idle(test_case_name)?;
        ACTIVE_TEST_CASE.with(|active| *active.borrow_mut() = Some(test_case_name.to_string()));
        Ok(Self { _private: () })
    }
}

impl Drop for ActiveTestCase {
    fn drop(&mut self) {
        ACTIVE_TEST_CASE.with(|active| active.borrow_mut().take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_leave() {
        {
            let _guard = ActiveTestCase::enter("Outer").unwrap();
            let err = ActiveTestCase::enter("Inner").unwrap_err();
            assert!(matches!(
                err,
                ConfigError::NestedTestCase { ref outer, ref inner } if outer == "Outer" && inner == "Inner"
            ));
            assert!(ensure_idle("Other").is_err());
        }
        assert!(ensure_idle("Other").is_ok());
        assert!(ActiveTestCase::enter("Next").is_ok());
    }

    #[test]
    fn test_other_threads_are_independent() {
        let _guard = ActiveTestCase::enter("Outer").unwrap();
        let handle = std::thread::spawn(|| ActiveTestCase::enter("Elsewhere").is_ok());
        assert!(handle.join().unwrap());
    }
}
