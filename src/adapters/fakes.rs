//! Test doubles for the platform ports
//!
//! Scripted native backends, recording collaborators and misbehaving key
//! stores. The scripted backends mirror the platform contract: events are
//! delivered on the session executor, the bound crypto object is echoed
//! back on success, and a cancellation after a terminal event is a no-op.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::adapters::SoftKeyStore;
use crate::cancel::NativeCancellationSignal;
use crate::error::KeyStoreError;
use crate::executor::Executor;
use crate::model::{error_code, AuthenticationCallback, BoxedCipher, CipherOp, CryptoHandle};
use crate::model::{Permission, PromptConfig};
use crate::ports::{
    Capabilities, FingerprintSensor, HostNavigator, KeySpec, KeyStore, PromptCrypto, PromptDialog,
    SensorCrypto, SensorEvent, SensorEventSink, UnifiedPrompt, UnifiedPromptEvent,
    UnifiedPromptEventSink, MIN_SUPPORTED_API, UNIFIED_PROMPT_MIN_API,
};

struct NoopCipher;

impl CipherOp for NoopCipher {
    fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>, KeyStoreError> {
        Ok(plaintext.to_vec())
    }
}

pub fn noop_cipher() -> BoxedCipher {
    Box::new(NoopCipher)
}

/// What the caller's callback observed, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackEvent {
    Help(u32, String),
    Failed,
    Error(u32, String),
    Succeeded { has_crypto: bool },
}

#[derive(Default)]
pub struct RecordingCallback {
    events: Mutex<Vec<CallbackEvent>>,
}

impl RecordingCallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CallbackEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn terminal_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| {
                matches!(
                    event,
                    CallbackEvent::Error(..) | CallbackEvent::Succeeded { .. }
                )
            })
            .count()
    }
}

impl AuthenticationCallback for RecordingCallback {
    fn on_authentication_help(&self, code: u32, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(CallbackEvent::Help(code, message.to_string()));
    }

    fn on_authentication_failed(&self) {
        self.events.lock().unwrap().push(CallbackEvent::Failed);
    }

    fn on_authentication_error(&self, code: u32, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(CallbackEvent::Error(code, message.to_string()));
    }

    fn on_authentication_succeeded(&self, crypto: Option<CryptoHandle>) {
        self.events.lock().unwrap().push(CallbackEvent::Succeeded {
            has_crypto: crypto.is_some(),
        });
    }
}

/// Navigation call-outs observed by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCall {
    PermissionRequested(Permission, u32),
    EnrollmentOpened(u32),
    SecuritySettingsOpened(u32),
}

#[derive(Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<NavigationCall>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<NavigationCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl HostNavigator for RecordingNavigator {
    fn request_permission(&self, permission: Permission, request_code: u32) {
        self.calls
            .lock()
            .unwrap()
            .push(NavigationCall::PermissionRequested(permission, request_code));
    }

    fn start_credential_enrollment(&self, request_code: u32) {
        self.calls
            .lock()
            .unwrap()
            .push(NavigationCall::EnrollmentOpened(request_code));
    }

    fn start_security_settings(&self, request_code: u32) {
        self.calls
            .lock()
            .unwrap()
            .push(NavigationCall::SecuritySettingsOpened(request_code));
    }
}

/// Substitute dialog that records its lifecycle into a shared log
///
/// The log is shared so a scripted sensor can interleave its own markers
/// and tests can assert ordering (dialog up before the native call).
pub struct RecordingDialog {
    log: Arc<Mutex<Vec<String>>>,
}

impl RecordingDialog {
    pub fn new(log: Arc<Mutex<Vec<String>>>) -> Self {
        Self { log }
    }
}

impl PromptDialog for RecordingDialog {
    fn show(&mut self, config: &PromptConfig) {
        self.log.lock().unwrap().push(format!("shown:{}", config.title));
    }

    fn update_status(&mut self, status: &str) {
        self.log.lock().unwrap().push(format!("status:{status}"));
    }

    fn dismiss(&mut self) {
        self.log.lock().unwrap().push("dismissed".to_string());
    }
}

/// Scripted unified prompt
///
/// Delivers its scripted events through the executor, echoes the bound
/// crypto object on success and arms the native abort path so a mid-session
/// cancellation yields exactly one terminal `Error`.
pub struct FakeUnifiedPrompt {
    pub events: Vec<UnifiedPromptEvent>,
    pub repeat_success: bool,
    pub saw_crypto: Arc<Mutex<Option<bool>>>,
    pub saw_title: Arc<Mutex<Option<String>>>,
    pub saw_negative_text: Arc<Mutex<Option<String>>>,
}

impl FakeUnifiedPrompt {
    pub fn scripted(events: Vec<UnifiedPromptEvent>) -> Self {
        Self {
            events,
            repeat_success: false,
            saw_crypto: Arc::new(Mutex::new(None)),
            saw_title: Arc::new(Mutex::new(None)),
            saw_negative_text: Arc::new(Mutex::new(None)),
        }
    }

    /// A session that stays open until cancelled.
    pub fn holding_open() -> Self {
        Self::scripted(Vec::new())
    }

    /// Every session ends with a single successful match.
    pub fn always_succeeding() -> Self {
        Self {
            repeat_success: true,
            ..Self::holding_open()
        }
    }
}

impl UnifiedPrompt for FakeUnifiedPrompt {
    fn create_cancellation(&self) -> Arc<NativeCancellationSignal> {
        Arc::new(NativeCancellationSignal::new())
    }

    fn authenticate(
        &mut self,
        config: &PromptConfig,
        crypto: Option<PromptCrypto>,
        cancel: Arc<NativeCancellationSignal>,
        executor: Arc<dyn Executor>,
        events: UnifiedPromptEventSink,
    ) {
        *self.saw_title.lock().unwrap() = Some(config.title.clone());
        *self.saw_negative_text.lock().unwrap() =
            config.negative_button.text().map(str::to_string);
        *self.saw_crypto.lock().unwrap() = Some(crypto.is_some());

        let sink = Arc::new(Mutex::new(events));
        let finished = Arc::new(AtomicBool::new(false));

        {
            let sink = Arc::clone(&sink);
            let finished = Arc::clone(&finished);
            let abort_executor = Arc::clone(&executor);
            cancel.set_abort_hook(move || {
                if finished.swap(true, Ordering::SeqCst) {
                    return;
                }
                abort_executor.execute(Box::new(move || {
                    if let Ok(mut deliver) = sink.lock() {
                        (*deliver)(UnifiedPromptEvent::Error {
                            code: error_code::CANCELED,
                            message: "authentication canceled".to_string(),
                        });
                    }
                }));
            });
        }

        let script = if self.repeat_success {
            vec![UnifiedPromptEvent::Succeeded { crypto: None }]
        } else {
            std::mem::take(&mut self.events)
        };

        let mut bound = crypto;
        for mut event in script {
            if finished.load(Ordering::SeqCst) {
                break;
            }
            if let UnifiedPromptEvent::Succeeded { crypto } = &mut event {
                if crypto.is_none() {
                    *crypto = bound.take();
                }
            }
            if matches!(
                event,
                UnifiedPromptEvent::Error { .. } | UnifiedPromptEvent::Succeeded { .. }
            ) {
                finished.store(true, Ordering::SeqCst);
            }
            let sink = Arc::clone(&sink);
            executor.execute(Box::new(move || {
                if let Ok(mut deliver) = sink.lock() {
                    (*deliver)(event);
                }
            }));
        }
    }
}

/// Scripted legacy sensor, same delivery contract as [`FakeUnifiedPrompt`]
pub struct FakeSensor {
    pub events: Vec<SensorEvent>,
    pub repeat_success: bool,
    pub saw_crypto: Arc<Mutex<Option<bool>>>,
    pub call_log: Option<Arc<Mutex<Vec<String>>>>,
}

impl FakeSensor {
    pub fn scripted(events: Vec<SensorEvent>) -> Self {
        Self {
            events,
            repeat_success: false,
            saw_crypto: Arc::new(Mutex::new(None)),
            call_log: None,
        }
    }

    pub fn holding_open() -> Self {
        Self::scripted(Vec::new())
    }

    /// Every session ends with a single successful match.
    pub fn always_succeeding() -> Self {
        Self {
            repeat_success: true,
            ..Self::holding_open()
        }
    }

    /// Share the dialog's log so ordering can be asserted.
    pub fn logging_into(mut self, log: Arc<Mutex<Vec<String>>>) -> Self {
        self.call_log = Some(log);
        self
    }
}

impl FingerprintSensor for FakeSensor {
    fn authenticate(
        &mut self,
        crypto: Option<SensorCrypto>,
        cancel: Arc<NativeCancellationSignal>,
        executor: Arc<dyn Executor>,
        events: SensorEventSink,
    ) {
        if let Some(log) = &self.call_log {
            log.lock().unwrap().push("sensor:authenticate".to_string());
        }
        *self.saw_crypto.lock().unwrap() = Some(crypto.is_some());

        let sink = Arc::new(Mutex::new(events));
        let finished = Arc::new(AtomicBool::new(false));

        {
            let sink = Arc::clone(&sink);
            let finished = Arc::clone(&finished);
            let abort_executor = Arc::clone(&executor);
            cancel.set_abort_hook(move || {
                if finished.swap(true, Ordering::SeqCst) {
                    return;
                }
                abort_executor.execute(Box::new(move || {
                    if let Ok(mut deliver) = sink.lock() {
                        (*deliver)(SensorEvent::Error {
                            code: error_code::CANCELED,
                            message: "fingerprint operation canceled".to_string(),
                        });
                    }
                }));
            });
        }

        let script = if self.repeat_success {
            vec![SensorEvent::Succeeded { crypto: None }]
        } else {
            std::mem::take(&mut self.events)
        };

        let mut bound = crypto;
        for mut event in script {
            if finished.load(Ordering::SeqCst) {
                break;
            }
            if let SensorEvent::Succeeded { crypto } = &mut event {
                if crypto.is_none() {
                    *crypto = bound.take();
                }
            }
            if matches!(
                event,
                SensorEvent::Error { .. } | SensorEvent::Succeeded { .. }
            ) {
                finished.store(true, Ordering::SeqCst);
            }
            let sink = Arc::clone(&sink);
            executor.execute(Box::new(move || {
                if let Ok(mut deliver) = sink.lock() {
                    (*deliver)(event);
                }
            }));
        }
    }
}

/// Capabilities backed by shared mutable state
///
/// Lets a test change the platform's answers after the prompt was built, to
/// show that the backend selection never re-evaluates.
#[derive(Clone, Default)]
pub struct SharedCapabilities {
    pub api_level: Arc<AtomicU32>,
    pub enrolled: Arc<AtomicBool>,
    pub permission_granted: Arc<AtomicBool>,
}

impl SharedCapabilities {
    pub fn at_api_level(api_level: u32) -> Self {
        let caps = Self::default();
        caps.api_level.store(api_level, Ordering::SeqCst);
        caps.enrolled.store(true, Ordering::SeqCst);
        caps.permission_granted.store(true, Ordering::SeqCst);
        caps
    }

    pub fn modern() -> Self {
        Self::at_api_level(UNIFIED_PROMPT_MIN_API)
    }

    pub fn legacy() -> Self {
        Self::at_api_level(MIN_SUPPORTED_API)
    }
}

impl Capabilities for SharedCapabilities {
    fn supports_unified_prompt(&self) -> bool {
        self.api_level.load(Ordering::SeqCst) >= UNIFIED_PROMPT_MIN_API
    }

    fn meets_minimum_platform_version(&self) -> bool {
        self.api_level.load(Ordering::SeqCst) >= MIN_SUPPORTED_API
    }

    fn has_biometric_hardware(&self) -> bool {
        true
    }

    fn has_enrolled_credential(&self) -> bool {
        self.enrolled.load(Ordering::SeqCst)
    }

    fn is_permission_granted(&self, _permission: Permission) -> bool {
        self.permission_granted.load(Ordering::SeqCst)
    }
}

/// Key store that counts generation calls
#[derive(Default)]
pub struct CountingKeyStore {
    inner: SoftKeyStore,
    generates: AtomicUsize,
}

impl CountingKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_calls(&self) -> usize {
        self.generates.load(Ordering::SeqCst)
    }
}

impl KeyStore for CountingKeyStore {
    fn generate_key(&self, spec: &KeySpec) -> Result<(), KeyStoreError> {
        self.generates.fetch_add(1, Ordering::SeqCst);
        self.inner.generate_key(spec)
    }

    fn contains_key(&self, name: &str) -> Result<bool, KeyStoreError> {
        self.inner.contains_key(name)
    }

    fn init_cipher(&self, name: &str) -> Result<BoxedCipher, KeyStoreError> {
        self.inner.init_cipher(name)
    }
}

/// Key store with injectable failures
pub struct FailingKeyStore {
    generate_error: Option<KeyStoreError>,
    cipher_error: Option<KeyStoreError>,
    inner: SoftKeyStore,
}

impl FailingKeyStore {
    pub fn failing_generate(error: KeyStoreError) -> Self {
        Self {
            generate_error: Some(error),
            cipher_error: None,
            inner: SoftKeyStore::new(),
        }
    }

    pub fn failing_cipher(error: KeyStoreError) -> Self {
        Self {
            generate_error: None,
            cipher_error: Some(error),
            inner: SoftKeyStore::new(),
        }
    }
}

impl KeyStore for FailingKeyStore {
    fn generate_key(&self, spec: &KeySpec) -> Result<(), KeyStoreError> {
        match &self.generate_error {
            Some(error) => Err(error.clone()),
            None => self.inner.generate_key(spec),
        }
    }

    fn contains_key(&self, name: &str) -> Result<bool, KeyStoreError> {
        self.inner.contains_key(name)
    }

    fn init_cipher(&self, name: &str) -> Result<BoxedCipher, KeyStoreError> {
        match &self.cipher_error {
            Some(error) => Err(error.clone()),
            None => self.inner.init_cipher(name),
        }
    }
}

/// Executor that queues tasks until drained
#[derive(Default)]
pub struct QueuedExecutor {
    tasks: Mutex<VecDeque<Box<dyn FnOnce() + Send>>>,
}

impl QueuedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }

    /// Run every queued task, including tasks queued while draining.
    pub fn run_all(&self) {
        loop {
            let task = self.tasks.lock().unwrap().pop_front();
            match task {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Executor for QueuedExecutor {
    fn execute(&self, task: Box<dyn FnOnce() + Send>) {
        self.tasks.lock().unwrap().push_back(task);
    }
}
