use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::codegen::generator::{GeneratorOptions, generate};
use crate::plugin::message::{PluginRequest, PluginResponse};
use crate::scene::scene_model::Selection;

/// What the session wants the caller to do after a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStep {
    Respond(PluginResponse),
    Close,
    /// Session already closed; request dropped.
    Ignored,
}

/// Request/response loop around one selection.
pub struct PluginSession {
    selection: Selection,
    options: GeneratorOptions,
    closed: bool,
}

impl PluginSession {
    pub fn new(selection: Selection, options: GeneratorOptions) -> Self {
        Self {
            selection,
            options,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn handle(&mut self, request: &PluginRequest) -> SessionStep {
        if self.closed {
            return SessionStep::Ignored;
        }

        match request {
            PluginRequest::Generate => match generate(&self.selection, &self.options) {
                Ok(text) => SessionStep::Respond(PluginResponse::SaveText { payload: text }),
                Err(e) => {
                    warn!(error = %e, "generation failed");
                    SessionStep::Respond(PluginResponse::Error {
                        payload: e.to_string(),
                    })
                }
            },
            PluginRequest::Cancel => {
                self.closed = true;
                SessionStep::Close
            }
        }
    }

    /// Serve newline-delimited JSON requests until `cancel` or end of input.
    ///
    /// Malformed lines are answered with an `error` response. Returns the
    /// number of requests handled.
    pub fn serve<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> std::io::Result<usize> {
        let mut handled = 0;

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let step = match serde_json::from_str::<PluginRequest>(&line) {
                Ok(request) => {
                    debug!(?request, "request");
                    handled += 1;
                    self.handle(&request)
                }
                Err(e) => SessionStep::Respond(PluginResponse::Error {
                    payload: format!("malformed request: {}", e),
                }),
            };

            match step {
                SessionStep::Respond(response) => write_response(&mut writer, &response)?,
                _ => break,
            }
        }

        info!(handled, "session ended");
        Ok(handled)
    }
}

fn write_response<W: Write>(writer: &mut W, response: &PluginResponse) -> std::io::Result<()> {
    let json = serde_json::to_string(response)?;
    writeln!(writer, "{}", json)?;
    writer.flush()
}
