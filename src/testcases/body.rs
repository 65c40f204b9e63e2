// Test body - everything a single before/main/after run needs

use anyhow::Result;
use std::sync::Arc;

use super::TestContext;

/// Actions of the before or after section
pub type SectionActions = Box<dyn FnOnce(&TestContext) -> Result<()>>;

/// Optional block configuring the initial data before it is transformed
pub type InitBlock<I> = Box<dyn FnOnce(&mut I)>;

/// Builds the main section data, applying the init block when one was given
pub type DataProducer<I, D> = Arc<dyn Fn(Option<InitBlock<I>>) -> D + Send + Sync>;

/// Steps of the main section, receiving the produced data by value
pub type MainSteps<D> = Box<dyn FnOnce(&TestContext, D) -> Result<()>>;

/// Data producer starting from `I::default()`, applying the init block and
/// then transforming the result with `transform`
pub fn data_producer<I, D, F>(transform: F) -> DataProducer<I, D>
where
    I: Default + 'static,
    F: Fn(I) -> D + Send + Sync + 'static,
{
    Arc::new(move |init: Option<InitBlock<I>>| {
        let mut data = I::default();
        if let Some(init) = init {
            init(&mut data);
        }
        transform(data)
    })
}

/// Producer for tests that carry no data between sections
pub fn no_data() -> DataProducer<(), ()> {
    Arc::new(|_: Option<InitBlock<()>>| ())
}

/// A fully described test, ready to be handed to the section runner
pub struct TestBody<I, D> {
    pub test_name: String,
    pub test_case_name: String,
    pub before_actions: SectionActions,
    pub after_actions: SectionActions,
    pub init_block: Option<InitBlock<I>>,
    pub data_producer: DataProducer<I, D>,
    pub main_steps: MainSteps<D>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Credentials {
        login: String,
        password: String,
    }

    #[test]
    fn test_data_producer_applies_init_block() {
        let producer = data_producer(|c: Credentials| format!("{}:{}", c.login, c.password));
        let init: InitBlock<Credentials> = Box::new(|c: &mut Credentials| {
            c.login = "admin".to_string();
            c.password = "secret".to_string();
        });
        let data = producer(Some(init));
        assert_eq!(data, "admin:secret");
    }

    #[test]
    fn test_data_producer_without_init_block() {
        let producer = data_producer(|c: Credentials| c.login.is_empty());
        assert!(producer(None));
    }

    #[test]
    fn test_no_data() {
        let producer = no_data();
        producer(None);
    }
}
