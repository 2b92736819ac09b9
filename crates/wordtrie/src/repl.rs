//! Interactive prompt over an [`IndexEngine`].
//!
//! Reads one command per line, writes results one per line. Malformed lines
//! are ignored; end of input ends the session.

mod command;

use std::io::{self, BufRead, Write};

pub use command::Command;

use crate::engine::IndexEngine;
use crate::loader;

pub const PROMPT: &str = "> ";

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug)]
pub struct Repl {
    engine: IndexEngine,
    files_loaded: usize,
}

impl Repl {
    pub fn new(engine: IndexEngine) -> Self {
        Self {
            engine,
            files_loaded: 0,
        }
    }

    pub fn engine(&self) -> &IndexEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut IndexEngine {
        &mut self.engine
    }

    /// Files loaded since start or the last `flush`.
    pub fn files_loaded(&self) -> usize {
        self.files_loaded
    }

    /// Runs the prompt loop until `input` is exhausted.
    ///
    /// Lines are decoded lossily, so invalid UTF-8 never ends the session.
    pub fn run(&mut self, mut input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            out.write_all(PROMPT.as_bytes())?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buf);
            self.execute_line(&line, out)?;
        }
    }

    /// Parses and executes one line. Unparseable lines are a no-op.
    pub fn execute_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        match Command::parse(line) {
            Some(command) => self.execute(command, out),
            None => Ok(()),
        }
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<()> {
        match command {
            Command::Load { path, file_glob } => {
                match loader::load_directory(&mut self.engine, &path, &file_glob) {
                    Ok(summary) => self.files_loaded += summary.files,
                    Err(error) => log::error!("failed to load {}: {error}", path.display()),
                }
            }
            Command::Get(key) => {
                let results = self.engine.get(&key);
                self.print_results(out, &key, results.len(), results.iter())?;
            }
            Command::QueryShallow(key) => {
                let results = self.engine.query_shallow(&key);
                self.print_results(out, &key, results.len(), results.iter())?;
            }
            Command::QueryDeep(key) => {
                let results = self.engine.query_deep(&key);
                self.print_results(out, &key, results.len(), results.iter())?;
            }
            Command::Insert { resource, content } => {
                self.engine.insert_resource(&resource, &content);
            }
            Command::Delete(key) => {
                self.engine.remove(&key);
            }
            Command::Echo(text) => writeln!(out, "{}", self.engine.echo(&text))?,
            Command::Flush => {
                self.engine.flush();
                self.files_loaded = 0;
            }
            Command::Info => {
                let stats = self.engine.stats();
                writeln!(out, "Nodes in trie: {}", stats.trie_nodes)?;
                writeln!(out, "Words inserted: {}", stats.total_insertions)?;
                writeln!(out, "Resource files: {}", self.files_loaded)?;
                writeln!(out, "Memory usage: {} bytes", stats.memory_usage)?;
            }
            Command::Clear => {
                out.write_all(CLEAR_SCREEN.as_bytes())?;
                out.flush()?;
            }
            Command::SetDebug(debug) => self.engine.set_debug(debug),
            Command::SetOrderFixed(order_fixed) => self.engine.set_order_fixed(order_fixed),
            Command::SetPermutationDepth(depth) => self.engine.set_permutation_depth(depth),
        }
        Ok(())
    }

    fn print_results<'a>(
        &self,
        out: &mut impl Write,
        key: &str,
        count: usize,
        results: impl Iterator<Item = &'a String>,
    ) -> io::Result<()> {
        if self.engine.debug() {
            writeln!(out, "{count} results for {key}")?;
        }
        for resource in results {
            writeln!(out, "{resource}")?;
        }
        Ok(())
    }
}
