//! The numeric menu loop.
//!
//! All retry and cancel handling lives here. Each pass through the loop makes
//! at most one single-shot call into the API. `0` cancels a prompt; end of
//! input ends the session like option 5 without the farewell.

use super::print::{print_items, print_menu, print_messages, prompt};
use console::Term;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use todofile::api::{CmdMessage, TodoApi};
use todofile::error::{Result, TodoError};
use todofile::model::ItemId;
use todofile::store::backend::StorageBackend;
use tracing::debug;

const TITLE_PROMPT: &str = "Todo title (0 to exit): ";
const ID_PROMPT: &str = "Todo id (0 to exit): ";
const INVALID_ID_PROMPT: &str = "Invalid id! Todo id (0 to exit): ";
const CANCEL: &str = "0";

/// Where the menu is shown. Only a real terminal can be cleared.
pub enum Screen {
    Terminal(Term),
    Plain,
}

impl Screen {
    pub fn detect() -> Self {
        let term = Term::stdout();
        if term.is_term() {
            term.set_title("Todo App");
            Screen::Terminal(term)
        } else {
            Screen::Plain
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Pauses {
    pub after_delete: Duration,
    pub before_exit: Duration,
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Requested,
    EndOfInput,
}

enum Step {
    Continue,
    Stop(Exit),
}

pub struct Menu<B: StorageBackend, R: BufRead, W: Write> {
    api: TodoApi<B>,
    input: R,
    out: W,
    screen: Screen,
    pauses: Pauses,
}

impl<B: StorageBackend, R: BufRead, W: Write> Menu<B, R, W> {
    pub fn new(api: TodoApi<B>, input: R, out: W, screen: Screen, pauses: Pauses) -> Self {
        Self {
            api,
            input,
            out,
            screen,
            pauses,
        }
    }

    pub fn run(&mut self) -> Result<Exit> {
        loop {
            print_menu(&mut self.out)?;
            let Some(line) = self.read_line()? else {
                return Ok(Exit::EndOfInput);
            };

            let step = match line.trim().parse::<i64>() {
                Ok(1) => self.add()?,
                Ok(2) => self.delete()?,
                Ok(3) => self.show_all()?,
                Ok(4) => {
                    self.clear()?;
                    Step::Continue
                }
                Ok(5) => self.exit()?,
                Ok(other) => {
                    debug!(option = other, "ignoring unknown menu option");
                    Step::Continue
                }
                Err(_) => Step::Continue,
            };

            if let Step::Stop(exit) = step {
                return Ok(exit);
            }
        }
    }

    #[cfg(test)]
    pub fn api(&self) -> &TodoApi<B> {
        &self.api
    }

    fn add(&mut self) -> Result<Step> {
        let title = loop {
            prompt(&mut self.out, TITLE_PROMPT)?;
            match self.read_line()? {
                None => return Ok(Step::Stop(Exit::EndOfInput)),
                Some(title) if title.is_empty() => continue,
                Some(title) => break title,
            }
        };

        if title == CANCEL {
            self.clear()?;
            return Ok(Step::Continue);
        }

        let result = self.api.add(&title)?;
        self.clear()?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Step::Continue)
    }

    fn delete(&mut self) -> Result<Step> {
        prompt(&mut self.out, ID_PROMPT)?;
        loop {
            let Some(id) = self.read_id()? else {
                return Ok(Step::Stop(Exit::EndOfInput));
            };
            if id == 0 {
                self.clear()?;
                return Ok(Step::Continue);
            }

            let result = match ItemId::try_from(id) {
                Ok(id) => self.api.delete(id),
                Err(_) => {
                    let missing = CmdMessage::warning(format!("Cannot find todo with id {}", id));
                    print_messages(&mut self.out, &[missing])?;
                    prompt(&mut self.out, ID_PROMPT)?;
                    continue;
                }
            };

            print_messages(&mut self.out, &result.messages)?;
            if result.not_found {
                prompt(&mut self.out, ID_PROMPT)?;
                continue;
            }

            thread::sleep(self.pauses.after_delete);
            self.clear()?;
            return Ok(Step::Continue);
        }
    }

    fn show_all(&mut self) -> Result<Step> {
        let result = self.api.list();
        print_items(&mut self.out, &result.listed_items)?;
        Ok(Step::Continue)
    }

    fn exit(&mut self) -> Result<Step> {
        writeln!(self.out, "Exiting...")?;
        self.out.flush()?;
        thread::sleep(self.pauses.before_exit);
        Ok(Step::Stop(Exit::Requested))
    }

    /// Clears the display only. The list and the file are untouched.
    fn clear(&mut self) -> Result<()> {
        self.out.flush()?;
        if let Screen::Terminal(term) = &self.screen {
            term.clear_screen().map_err(TodoError::Io)?;
        }
        Ok(())
    }

    /// Read until a line parses as an integer. `None` at end of input.
    fn read_id(&mut self) -> Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(id) => return Ok(Some(id)),
                Err(_) => prompt(&mut self.out, INVALID_ID_PROMPT)?,
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(TodoError::Io)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};
    use todofile::model::Item;
    use todofile::store::mem_backend::MemBackend;

    type TestMenu = Menu<MemBackend, Cursor<Vec<u8>>, Vec<u8>>;

    fn session(backend: MemBackend, input: &str) -> (Exit, String, TestMenu) {
        colored::control::set_override(false);
        let (api, _) = TodoApi::open(backend);
        let mut menu = Menu::new(
            api,
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Screen::Plain,
            Pauses::default(),
        );
        let exit = menu.run().unwrap();
        let output = String::from_utf8(menu.out.clone()).unwrap();
        (exit, output, menu)
    }

    fn stored(menu: &TestMenu) -> Vec<Item> {
        menu.api().items().to_vec()
    }

    #[test]
    fn exit_option_says_goodbye() {
        let (exit, output, _) = session(MemBackend::new(), "5\n");
        assert_eq!(exit, Exit::Requested);
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let (exit, output, _) = session(MemBackend::new(), "");
        assert_eq!(exit, Exit::EndOfInput);
        assert!(!output.contains("Exiting..."));
    }

    #[test]
    fn add_reprompts_on_empty_title() {
        let (_, output, menu) = session(MemBackend::new(), "1\n\n\nBuy milk\n5\n");
        assert_eq!(output.matches(TITLE_PROMPT).count(), 3);
        assert_eq!(stored(&menu), vec![Item::new(1, "Buy milk")]);
        assert_eq!(
            menu.api().store().backend().lines(),
            Some(vec![r#"{id:1, title:"Buy milk"}"#.to_string()])
        );
    }

    #[test]
    fn add_zero_cancels() {
        let (_, _, menu) = session(MemBackend::new(), "1\n0\n5\n");
        assert!(stored(&menu).is_empty());
        assert_eq!(menu.api().store().backend().lines(), None);
    }

    #[test]
    fn show_all_lists_items() {
        let backend = MemBackend::with_lines([r#"{id:2, title:"B"}"#, r#"{id:1, title:"A"}"#]);
        let (_, output, _) = session(backend, "3\n5\n");
        assert!(output.contains("2 - B\n1 - A\n"));
    }

    #[test]
    fn delete_retries_until_found() {
        let backend = MemBackend::with_lines([r#"{id:1, title:"A"}"#, r#"{id:2, title:"B"}"#]);
        let (_, output, menu) = session(backend, "2\nabc\n7\n-3\n4294967296\n2\n5\n");

        assert!(output.contains(INVALID_ID_PROMPT));
        assert!(output.contains("Cannot find todo with id 7"));
        assert!(output.contains("Cannot find todo with id -3\n"));
        assert!(output.contains("Cannot find todo with id 4294967296\n"));
        assert!(output.contains("Todo with id 2 was successfully deleted."));
        assert_eq!(stored(&menu), vec![Item::new(1, "A")]);
    }

    #[test]
    fn delete_zero_cancels_after_not_found() {
        let backend = MemBackend::with_lines([r#"{id:1, title:"A"}"#]);
        let (_, _, menu) = session(backend, "2\n9\n0\n5\n");
        assert_eq!(stored(&menu), vec![Item::new(1, "A")]);
    }

    #[test]
    fn clear_leaves_data_alone() {
        let backend = MemBackend::with_lines([r#"{id:1, title:"A"}"#]);
        let (_, _, menu) = session(backend, "4\n5\n");
        assert_eq!(stored(&menu), vec![Item::new(1, "A")]);
        assert_eq!(
            menu.api().store().backend().lines(),
            Some(vec![r#"{id:1, title:"A"}"#.to_string()])
        );
    }

    #[test]
    fn unknown_and_garbage_options_redisplay_menu() {
        let (_, output, _) = session(MemBackend::new(), "9\nhello\n5\n");
        assert_eq!(output.matches("Enter option: ").count(), 3);
    }

    #[test]
    fn save_failure_is_shown_and_item_kept() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(Some(io::ErrorKind::PermissionDenied));
        let (_, output, menu) = session(backend, "1\nA\n5\n");

        assert!(output.contains("You do not have permission to write"));
        assert_eq!(stored(&menu), vec![Item::new(1, "A")]);
    }

    #[test]
    fn crlf_input_is_accepted() {
        let (_, _, menu) = session(MemBackend::new(), "1\r\nA\r\n5\r\n");
        assert_eq!(stored(&menu), vec![Item::new(1, "A")]);
    }
}
