//! Streaming element parser
//!
//! Pulls events from an XML document in one forward pass and hands the
//! caller one flat record per "watched" element, without building a tree.
//!
//! ## Protocol
//! - The first element must match the configured root name (if any),
//!   otherwise parsing fails with `Error::FormatMismatch`.
//! - Outside a tracked element, each watched element start is offered to
//!   [`ElementHandler::element_start`]; returning `true` starts tracking it.
//! - While tracking, every nested element name and attribute is recorded in
//!   a flat [`ElementState`], and character data accumulates under the most
//!   recently opened element.
//! - When the tracked element closes, [`ElementHandler::element_end`]
//!   receives the state, which is then cleared.
//!
//! Memory use is bounded by the size of one tracked element.

pub mod state;

pub use state::{Attributes, ElementState};

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Callbacks driven by [`StreamingElementParser`]
pub trait ElementHandler {
    /// A watched element opened outside any tracked element
    ///
    /// Return `true` to track it (accumulate everything under it).
    fn element_start(&mut self, name: &str, attributes: &Attributes) -> bool;

    /// The tracked element closed; `state` holds everything recorded under it
    fn element_end(&mut self, name: &str, state: &ElementState);
}

/// Closure adapter for [`ElementHandler`]
pub struct Callbacks<S, E> {
    start: S,
    end: E,
}

/// Build an [`ElementHandler`] from a start and an end closure
pub fn callbacks<S, E>(start: S, end: E) -> Callbacks<S, E>
where
    S: FnMut(&str, &Attributes) -> bool,
    E: FnMut(&str, &ElementState),
{
    Callbacks { start, end }
}

impl<S, E> ElementHandler for Callbacks<S, E>
where
    S: FnMut(&str, &Attributes) -> bool,
    E: FnMut(&str, &ElementState),
{
    fn element_start(&mut self, name: &str, attributes: &Attributes) -> bool {
        (self.start)(name, attributes)
    }

    fn element_end(&mut self, name: &str, state: &ElementState) {
        (self.end)(name, state)
    }
}

/// Where the parser is in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserState {
    /// No element seen yet
    AwaitingRoot,
    /// Inside the root, outside any tracked element
    Scanning,
    /// Inside a tracked element
    Tracking {
        /// Name of the tracked element
        name: String,
        /// Element that receives character data
        current: String,
        /// Whether `current` is still open
        open: bool,
    },
    /// Root element closed
    Done,
}

/// Input to the state machine, decoded from a markup event
#[derive(Debug)]
enum Token {
    Start { name: String, attributes: Attributes },
    End { name: String },
    Text(String),
    Eof,
}

/// Incremental parser that extracts flat records for watched elements
#[derive(Debug)]
pub struct StreamingElementParser {
    root: Option<String>,
    watch_list: HashSet<String>,
    state: ParserState,
    record: ElementState,
    depth: usize,
}

impl StreamingElementParser {
    /// Create a parser
    ///
    /// # Arguments
    /// * `root` - Required name of the outermost element, or None to accept any
    /// * `watch_list` - Element names offered to the start callback
    pub fn new<I, S>(root: Option<&str>, watch_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.map(str::to_string),
            watch_list: watch_list.into_iter().map(Into::into).collect(),
            state: ParserState::AwaitingRoot,
            record: ElementState::default(),
            depth: 0,
        }
    }

    /// Current state (useful after a failed parse)
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Parse a file from disk
    pub fn parse_file<H>(&mut self, path: impl AsRef<Path>, handler: &mut H) -> Result<()>
    where
        H: ElementHandler + ?Sized,
    {
        let path = path.as_ref();
        debug!("Parsing {}", path.display());
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file), handler)
    }

    /// Parse a document held in memory
    pub fn parse_str<H>(&mut self, xml: &str, handler: &mut H) -> Result<()>
    where
        H: ElementHandler + ?Sized,
    {
        self.parse_reader(xml.as_bytes(), handler)
    }

    /// Parse a document from any buffered reader
    ///
    /// Each call starts from a fresh state, so one parser can read several
    /// documents in turn.
    pub fn parse_reader<R, H>(&mut self, source: R, handler: &mut H) -> Result<()>
    where
        R: BufRead,
        H: ElementHandler + ?Sized,
    {
        self.reset();

        let mut reader = Reader::from_reader(source);
        let mut buf = Vec::new();

        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| markup_error(e, reader.buffer_position()))?;
            let position = reader.buffer_position();

            match event {
                Event::Start(e) => {
                    let token = start_token(&e, &reader, position)?;
                    self.advance(token, handler)?;
                }
                Event::Empty(e) => {
                    let token = start_token(&e, &reader, position)?;
                    let name = element_name(e.name().as_ref(), &reader, position)?;
                    self.advance(token, handler)?;
                    self.advance(Token::End { name }, handler)?;
                }
                Event::End(e) => {
                    let name = element_name(e.name().as_ref(), &reader, position)?;
                    self.advance(Token::End { name }, handler)?;
                }
                Event::Text(e) => {
                    let text = e.unescape().map_err(|e| markup_error(e, position))?;
                    self.advance(Token::Text(text.into_owned()), handler)?;
                }
                Event::CData(e) => {
                    let text = reader
                        .decoder()
                        .decode(&e)
                        .map_err(|e| markup_error(e, position))?;
                    self.advance(Token::Text(text.into_owned()), handler)?;
                }
                Event::Eof => {
                    self.advance(Token::Eof, handler)?;
                    break;
                }
                // Declarations, comments, processing instructions, doctypes
                _ => {}
            }

            buf.clear();
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.state = ParserState::AwaitingRoot;
        self.record.clear();
        self.depth = 0;
    }

    /// Apply one token to the state machine
    fn advance<H>(&mut self, token: Token, handler: &mut H) -> Result<()>
    where
        H: ElementHandler + ?Sized,
    {
        match token {
            Token::Start { name, attributes } => self.on_start(name, attributes, handler),
            Token::End { name } => self.on_end(name, handler),
            Token::Text(text) => self.on_text(&text),
            Token::Eof => self.on_eof(),
        }
    }

    fn on_start<H>(&mut self, name: String, attributes: Attributes, handler: &mut H) -> Result<()>
    where
        H: ElementHandler + ?Sized,
    {
        match &mut self.state {
            ParserState::AwaitingRoot => {
                if let Some(root) = &self.root {
                    if *root != name {
                        return Err(Error::FormatMismatch {
                            expected: root.clone(),
                            found: name,
                        });
                    }
                }
                self.state = ParserState::Scanning;
            }
            ParserState::Done => {
                return Err(Error::Parse(format!(
                    "element <{}> after the document element",
                    name
                )));
            }
            ParserState::Scanning => {
                if self.watch_list.contains(&name) && handler.element_start(&name, &attributes) {
                    self.record.begin_element(&name, attributes);
                    self.state = ParserState::Tracking {
                        current: name.clone(),
                        name,
                        open: true,
                    };
                }
            }
            ParserState::Tracking { current, open, .. } => {
                self.record.begin_element(&name, attributes);
                *current = name;
                *open = true;
            }
        }

        self.depth += 1;
        Ok(())
    }

    fn on_end<H>(&mut self, name: String, handler: &mut H) -> Result<()>
    where
        H: ElementHandler + ?Sized,
    {
        self.depth = self
            .depth
            .checked_sub(1)
            .ok_or_else(|| Error::Parse(format!("unexpected closing tag </{}>", name)))?;

        let mut finished = false;
        if let ParserState::Tracking {
            name: tracked,
            open,
            ..
        } = &mut self.state
        {
            if *tracked == name {
                handler.element_end(&name, &self.record);
                finished = true;
            } else {
                *open = false;
            }
        }

        if finished {
            self.record.clear();
            self.state = ParserState::Scanning;
        }
        if self.depth == 0 {
            self.state = ParserState::Done;
        }
        Ok(())
    }

    fn on_text(&mut self, text: &str) -> Result<()> {
        match &self.state {
            ParserState::AwaitingRoot | ParserState::Done => {
                if !text.trim().is_empty() {
                    return Err(Error::Parse(
                        "character data outside the document element".to_string(),
                    ));
                }
            }
            ParserState::Scanning => {}
            ParserState::Tracking { current, open, .. } => {
                self.record.append_text(current, text, *open);
            }
        }
        Ok(())
    }

    fn on_eof(&mut self) -> Result<()> {
        match self.state {
            ParserState::AwaitingRoot => Err(Error::Parse("no element found".to_string())),
            _ if self.depth > 0 => Err(Error::Parse(format!(
                "{} unclosed element(s) at end of input",
                self.depth
            ))),
            _ => Ok(()),
        }
    }
}

/// Decode an element's name and attributes into a start token
///
/// Names and values are decoded with the encoding the document declares.
fn start_token<B>(element: &BytesStart<'_>, reader: &Reader<B>, position: usize) -> Result<Token> {
    let name = element_name(element.name().as_ref(), reader, position)?;

    let mut attributes = Attributes::new();
    for attribute in element.attributes() {
        let attribute = attribute
            .map_err(|e| Error::Parse(format!("bad attribute in <{}> at byte {}: {}", name, position, e)))?;
        let key = element_name(attribute.key.as_ref(), reader, position)?;
        let value = attribute
            .decode_and_unescape_value(reader)
            .map_err(|e| markup_error(e, position))?;
        attributes.insert(key, value.into_owned());
    }

    Ok(Token::Start { name, attributes })
}

fn element_name<B>(raw: &[u8], reader: &Reader<B>, position: usize) -> Result<String> {
    reader
        .decoder()
        .decode(raw)
        .map(|name| name.into_owned())
        .map_err(|e| markup_error(e, position))
}

/// Map reader failures to I/O errors and everything else to parse errors
fn markup_error(error: quick_xml::Error, position: usize) -> Error {
    match error {
        quick_xml::Error::Io(e) => Error::Io(std::io::Error::new(e.kind(), e.to_string())),
        other => Error::Parse(format!("{} at byte {}", other, position)),
    }
}
