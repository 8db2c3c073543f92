//! Helpers shared by the integration tests.
#![allow(dead_code)]

use hbtools_logger::{ConsoleStyle, LoggerFactory};
use regex::Regex;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory console shared between the factory and the test.
#[derive(Clone, Default)]
pub struct CapturedConsole(Arc<Mutex<Vec<u8>>>);

impl CapturedConsole {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for CapturedConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A factory whose console handlers all write into the returned capture.
pub fn capturing_factory(style: ConsoleStyle) -> (LoggerFactory, CapturedConsole) {
    let console = CapturedConsole::default();
    let writer = console.clone();
    let factory = LoggerFactory::with_console_writer(style, move || {
        Box::new(writer.clone()) as Box<dyn Write + Send>
    });
    (factory, console)
}

pub fn strip_ansi(text: &str) -> String {
    let ansi = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    ansi.replace_all(text, "").into_owned()
}
