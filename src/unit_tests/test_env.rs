use std::sync::{LockResult, Mutex, MutexGuard, RwLock};

use once_cell::sync::Lazy;

use crate::runtime::{Diagnostic, Env};

pub static TEST_ENV: Lazy<TestEnv> = Lazy::new(TestEnv::new);

#[derive(Debug)]
pub struct TestEnv {
    pub(crate) diagnostics: RwLock<Vec<Diagnostic>>,
    pub(crate) env_mutex: Mutex<()>,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            diagnostics: Default::default(),
            env_mutex: Default::default(),
        }
    }
    pub fn reset(&'static self) -> LockResult<MutexGuard<'static, ()>> {
        let env_mutex = self.env_mutex.lock();
        self.diagnostics
            .write()
            .expect("diagnostics write failed")
            .clear();
        env_mutex
    }
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .read()
            .expect("diagnostics read failed")
            .to_owned()
    }
}

impl Env for TestEnv {
    fn log(diagnostic: Diagnostic) {
        TEST_ENV
            .diagnostics
            .write()
            .expect("diagnostics write failed")
            .push(diagnostic);
    }
}
