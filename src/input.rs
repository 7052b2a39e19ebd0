//! Input providers: where the image path and model id come from.
//!
//! The analyzer does not care whether a request was typed at a console,
//! clicked in a GUI or listed in a script; it only needs an
//! [`AnalysisRequest`].

use crate::types::AnalysisRequest;
use crate::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

/// Supplies analysis requests to the core flow.
#[async_trait]
pub trait InputProvider: Send {
    /// Next request, or `None` when the provider is exhausted.
    async fn next_request(&mut self) -> Result<Option<AnalysisRequest>>;
}

/// Fixed list of requests, handed out in order.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<AnalysisRequest>,
}

impl ScriptedInput {
    pub fn new(requests: impl IntoIterator<Item = AnalysisRequest>) -> Self {
        Self {
            queue: requests.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

#[async_trait]
impl InputProvider for ScriptedInput {
    async fn next_request(&mut self) -> Result<Option<AnalysisRequest>> {
        Ok(self.queue.pop_front())
    }
}

pub const PATH_PROMPT: &str = "Please enter the full path to the screenshot file: ";
pub const MODEL_PROMPT: &str = "Model id (leave empty for default): ";

/// Line-oriented prompt that asks for one request and is then exhausted.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
    ask_model: bool,
    done: bool,
}

impl ConsoleInput<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead + Send, W: Write + Send> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            ask_model: false,
            done: false,
        }
    }

    /// Also prompt for a model id after the path.
    pub fn ask_model(mut self, enable: bool) -> Self {
        self.ask_model = enable;
        self
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Drop every quote character, as pasted paths often arrive quoted
/// (`"C:\shots\table 1.png"`), then trim.
pub fn clean_path(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '"' | '\''))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Request from positional `[IMAGE_PATH] [MODEL_ID]` arguments.
///
/// The shell has already removed any quoting, so the path is used as given.
pub fn request_from_args<S: AsRef<str>>(args: &[S]) -> Option<AnalysisRequest> {
    let path = args.first()?.as_ref();
    if path.is_empty() {
        return None;
    }
    let mut request = AnalysisRequest::new(path);
    if let Some(model) = args.get(1) {
        request = request.with_model(model.as_ref());
    }
    Some(request)
}

#[async_trait]
impl<R: BufRead + Send, W: Write + Send> InputProvider for ConsoleInput<R, W> {
    async fn next_request(&mut self) -> Result<Option<AnalysisRequest>> {
        if self.done {
            return Ok(None);
        }
        self.done = true;

        let path = match self.prompt(PATH_PROMPT)? {
            Some(line) => clean_path(&line),
            None => return Ok(None),
        };
        if path.is_empty() {
            return Ok(None);
        }

        let mut request = AnalysisRequest::new(path);
        if self.ask_model {
            if let Some(model) = self.prompt(MODEL_PROMPT)? {
                request = request.with_model(model);
            }
        }
        Ok(Some(request))
    }
}
