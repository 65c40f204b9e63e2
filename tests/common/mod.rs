// Shared fixtures for integration tests
#![allow(dead_code)]

use anyhow::{Result, anyhow};
use droidtestify::TestRunWatcherInterceptor;
use droidtestify::device::{Device, DeviceError, Location, Screenshots};
use droidtestify::interceptors::WatcherEvent;
use droidtestify::testcases::TestInfo;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &EventLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// How a recording interceptor misbehaves on a given event
#[derive(Clone, Copy)]
pub enum Misbehaviour {
    Error,
    Panic,
}

/// Appends `<id>:<event>` to a shared log for every callback
pub struct RecordingInterceptor {
    id: String,
    log: EventLog,
    failures: Vec<(WatcherEvent, Misbehaviour)>,
}

impl RecordingInterceptor {
    pub fn new(id: &str, log: &EventLog) -> Self {
        Self {
            id: id.to_string(),
            log: Arc::clone(log),
            failures: Vec::new(),
        }
    }

    pub fn failing_on(mut self, event: WatcherEvent, how: Misbehaviour) -> Self {
        self.failures.push((event, how));
        self
    }

    fn record(&self, event: WatcherEvent) -> Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.id, event));

        match self.failures.iter().find(|(e, _)| *e == event) {
            Some((_, Misbehaviour::Error)) => Err(anyhow!("{} refused {}", self.id, event)),
            Some((_, Misbehaviour::Panic)) => panic!("{} panicked on {}", self.id, event),
            None => Ok(()),
        }
    }
}

impl TestRunWatcherInterceptor for RecordingInterceptor {
    fn name(&self) -> &str {
        &self.id
    }

    fn on_test_started(&self, _test_info: &TestInfo) -> Result<()> {
        self.record(WatcherEvent::TestStarted)
    }

    fn on_before_section_started(&self, _test_info: &TestInfo) -> Result<()> {
        self.record(WatcherEvent::BeforeSectionStarted)
    }

    fn on_before_section_finished_success(&self, _test_info: &TestInfo) -> Result<()> {
        self.record(WatcherEvent::BeforeSectionFinishedSuccess)
    }

    fn on_before_section_finished_failed(
        &self,
        _test_info: &TestInfo,
        _error: &anyhow::Error,
    ) -> Result<()> {
        self.record(WatcherEvent::BeforeSectionFinishedFailed)
    }

    fn on_main_section_started(&self, _test_info: &TestInfo) -> Result<()> {
        self.record(WatcherEvent::MainSectionStarted)
    }

    fn on_main_section_finished_success(&self, _test_info: &TestInfo) -> Result<()> {
        self.record(WatcherEvent::MainSectionFinishedSuccess)
    }

    fn on_main_section_finished_failed(
        &self,
        _test_info: &TestInfo,
        _error: &anyhow::Error,
    ) -> Result<()> {
        self.record(WatcherEvent::MainSectionFinishedFailed)
    }

    fn on_after_section_started(&self, _test_info: &TestInfo) -> Result<()> {
        self.record(WatcherEvent::AfterSectionStarted)
    }

    fn on_after_section_finished_success(&self, _test_info: &TestInfo) -> Result<()> {
        self.record(WatcherEvent::AfterSectionFinishedSuccess)
    }

    fn on_after_section_finished_failed(
        &self,
        _test_info: &TestInfo,
        _error: &anyhow::Error,
    ) -> Result<()> {
        self.record(WatcherEvent::AfterSectionFinishedFailed)
    }

    fn on_test_finished(&self, _test_info: &TestInfo, success: bool) -> Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:onTestFinished({})", self.id, success));
        Ok(())
    }
}

/// Device double recording every call
#[derive(Default)]
pub struct FakeDevice {
    pub calls: Mutex<Vec<String>>,
}

impl Location for FakeDevice {
    fn enable_gps(&self) -> Result<(), DeviceError> {
        self.calls.lock().unwrap().push("enable_gps".to_string());
        Ok(())
    }

    fn disable_gps(&self) -> Result<(), DeviceError> {
        self.calls.lock().unwrap().push("disable_gps".to_string());
        Ok(())
    }

    fn set_location(&self, lat: f64, lon: f64) -> Result<(), DeviceError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("set_location({}, {})", lat, lon));
        Ok(())
    }
}

impl Screenshots for FakeDevice {
    fn take_screenshot(&self, tag: &str) -> Result<PathBuf, DeviceError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("screenshot({})", tag));
        Ok(PathBuf::from(format!("{}.png", tag)))
    }
}

pub fn fake_device() -> (Arc<FakeDevice>, Device) {
    let fake = Arc::new(FakeDevice::default());
    let device = Device::new(fake.clone(), fake.clone());
    (fake, device)
}
