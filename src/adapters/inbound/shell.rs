use crate::adapters::outbound::formatters::format_idr;
use crate::application::read_models::ReadModelBuilder;
use crate::application::sessions::{BrowseSession, BuilderSession, Dropdown};
use crate::build_planning::domain::{Catalog, Slot};
use crate::build_planning::services::QuoteGenerator;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;

const PROMPT: &str = "pc-build> ";

const HELP: &str = "\
Commands:
  browse <slot> [text]   List a category, optionally filtered (matches price too)
  search <slot> [text]   Open the slot's picker and filter by name, brand or specs
  select <slot> <id>     Put a component into the slot
  clear <slot>           Empty the slot
  reset                  Empty every slot
  summary                Print the build quote
  help                   Show this help
  quit                   Leave the shell
";

/// Outcome of a single command line
enum Flow {
    Continue,
    Quit,
}

/// InteractiveShell inbound adapter
///
/// Reads one command per line and drives a [`BuilderSession`]. Command
/// failures are printed and the loop continues; only I/O errors end it.
pub struct InteractiveShell<R: BufRead, W: Write> {
    input: R,
    output: W,
    session: BuilderSession,
    browser: BrowseSession,
    formatter: Box<dyn ReportFormatter>,
}

impl<R: BufRead, W: Write> InteractiveShell<R, W> {
    pub fn new(catalog: Catalog, formatter: Box<dyn ReportFormatter>, input: R, output: W) -> Self {
        Self {
            input,
            output,
            session: BuilderSession::new(catalog),
            browser: BrowseSession::default(),
            formatter,
        }
    }

    /// Starts browsing on `slot` instead of the default category
    pub fn with_default_category(mut self, slot: Slot) -> Self {
        self.browser = BrowseSession::new(slot);
        self
    }

    pub fn session(&self) -> &BuilderSession {
        &self.session
    }

    /// Runs until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "PC build simulator. Type 'help' for commands.")?;

        let mut line = String::new();
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            match self.dispatch(line.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => writeln!(self.output, "❌ {}", e)?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> Result<Flow> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let (command, rest) = split_word(line);
        match command.to_ascii_lowercase().as_str() {
            "browse" => self.browse(rest)?,
            "search" => self.search(rest)?,
            "select" => self.select(rest)?,
            "clear" => self.clear(rest)?,
            "reset" => {
                self.session.reset_all();
                writeln!(self.output, "Build reset. Total: {}", format_idr(0))?;
            }
            "summary" => self.summary()?,
            "help" => write!(self.output, "{}", HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => anyhow::bail!("Unknown command '{}'. Type 'help' for commands.", other),
        }
        Ok(Flow::Continue)
    }

    fn browse(&mut self, args: &str) -> Result<()> {
        let (slot, text) = split_word(args);
        if !slot.is_empty() {
            self.browser.switch_category(parse_slot(slot)?);
        }
        self.browser.set_search(text);

        let catalog = self.session.catalog();
        let Some(category) = catalog.category(self.browser.slot()) else {
            anyhow::bail!("Category '{}' is not in the catalog", self.browser.slot());
        };

        let matches = self.browser.listing(catalog);
        let listing = ReadModelBuilder::listing(category, self.browser.search_term(), &matches);
        let rendered = self.formatter.format_listing(&listing)?;
        writeln!(self.output, "{}", rendered.trim_end())?;
        Ok(())
    }

    fn search(&mut self, args: &str) -> Result<()> {
        let (slot, text) = split_word(args);
        let slot = parse_slot(slot)?;

        match self.session.search(slot, text) {
            Dropdown::Hidden => {}
            Dropdown::NoResults => writeln!(self.output, "No components found")?,
            Dropdown::Listing(items) | Dropdown::Matches(items) => {
                for component in items {
                    writeln!(
                        self.output,
                        "  {:<24} {:<48} {}",
                        component.id().as_str(),
                        component.display_name(),
                        format_idr(component.price().amount())
                    )?;
                }
            }
        }
        Ok(())
    }

    fn select(&mut self, args: &str) -> Result<()> {
        let (slot, id) = split_word(args);
        let slot = parse_slot(slot)?;
        if id.is_empty() {
            anyhow::bail!("Usage: select <slot> <id>");
        }

        let name = self.session.select(slot, id)?.display_name();
        let total = format_idr(self.session.total().amount());
        writeln!(self.output, "Selected {} for {}. Total: {}", name, slot, total)?;
        Ok(())
    }

    fn clear(&mut self, args: &str) -> Result<()> {
        let slot = parse_slot(args)?;
        self.session.clear(slot);
        let total = format_idr(self.session.total().amount());
        writeln!(self.output, "Cleared {}. Total: {}", slot, total)?;
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        let metadata = QuoteGenerator::generate_default_metadata();
        let view = ReadModelBuilder::build_summary(
            self.session.catalog(),
            self.session.build(),
            &metadata,
        );
        let rendered = self.formatter.format_build(&view)?;
        writeln!(self.output, "{}", rendered.trim_end())?;
        Ok(())
    }
}

/// Splits off the first whitespace-delimited word
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

fn parse_slot(text: &str) -> Result<Slot> {
    if text.is_empty() {
        anyhow::bail!("Missing slot. Expected one of: {}", Slot::ALL.map(Slot::key).join(", "));
    }
    Slot::from_str(text).map_err(anyhow::Error::msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::catalog::EmbeddedCatalog;
    use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    use crate::ports::outbound::CatalogReader;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, BuilderSession) {
        let catalog = EmbeddedCatalog::new().read_catalog().unwrap();
        let mut output = Vec::new();
        let session = {
            let mut shell = InteractiveShell::new(
                catalog,
                Box::new(MarkdownFormatter::new()),
                Cursor::new(script.to_string()),
                &mut output,
            );
            shell.run().unwrap();
            shell.session().clone()
        };
        (String::from_utf8(output).unwrap(), session)
    }

    #[test]
    fn test_split_word() {
        assert_eq!(split_word("search cpu amd ryzen"), ("search", "cpu amd ryzen"));
        assert_eq!(split_word("  reset"), ("reset", ""));
        assert_eq!(split_word(""), ("", ""));
    }

    #[test]
    fn test_select_updates_total() {
        let (output, session) = run_script("select cpu cpu-ryzen5-7600\nselect gpu gpu-rtx4060\nquit\n");
        assert!(output.contains("Selected AMD Ryzen 5 7600 for cpu. Total: Rp 3.200.000"));
        assert!(output.contains("Total: Rp 8.200.000"));
        assert_eq!(session.total().amount(), 8_200_000);
    }

    #[test]
    fn test_search_lists_matches() {
        let (output, _) = run_script("search cpu intel\n");
        assert!(output.contains("cpu-i5-13400f"));
        assert!(!output.contains("cpu-ryzen5-7600"));
    }

    #[test]
    fn test_search_without_text_lists_category() {
        let (output, _) = run_script("search cpu\n");
        assert!(output.contains("cpu-ryzen5-7600"));
        assert!(output.contains("cpu-i7-14700k"));
    }

    #[test]
    fn test_search_does_not_match_price() {
        let (output, _) = run_script("search cpu 3200000\n");
        assert!(output.contains("No components found"));
    }

    #[test]
    fn test_browse_matches_price() {
        let (output, _) = run_script("browse cpu 3200000\n");
        assert!(output.contains("# Processor (CPU)"));
        assert!(output.contains("Ryzen 5 7600"));
        assert!(output.contains("Showing 1 result(s)"));
    }

    #[test]
    fn test_default_category_for_browse() {
        let catalog = EmbeddedCatalog::new().read_catalog().unwrap();
        let mut output = Vec::new();
        InteractiveShell::new(
            catalog,
            Box::new(MarkdownFormatter::new()),
            Cursor::new("browse\n"),
            &mut output,
        )
        .with_default_category(Slot::Cooling)
        .run()
        .unwrap();

        assert!(String::from_utf8(output).unwrap().contains("# Cooling"));
    }

    #[test]
    fn test_errors_do_not_stop_the_shell() {
        let (output, session) =
            run_script("select cpu nope\nfly away\nselect monitor x\nselect cpu cpu-i5-13400f\n");
        assert!(output.contains("❌ Unknown component 'nope'"));
        assert!(output.contains("❌ Unknown command 'fly'"));
        assert!(output.contains("❌ Invalid slot: monitor"));
        assert_eq!(session.total().amount(), 2_900_000);
    }

    #[test]
    fn test_clear_and_reset() {
        let (output, session) = run_script(
            "select cpu cpu-ryzen5-7600\nselect gpu gpu-rtx4060\nclear gpu\nreset\n",
        );
        assert!(output.contains("Cleared gpu. Total: Rp 3.200.000"));
        assert!(output.contains("Build reset. Total: Rp 0"));
        assert!(session.build().is_empty());
    }

    #[test]
    fn test_quit_stops_reading() {
        let (_, session) = run_script("quit\nselect cpu cpu-ryzen5-7600\n");
        assert!(session.build().is_empty());
    }

    #[test]
    fn test_summary_uses_formatter() {
        let catalog = EmbeddedCatalog::new().read_catalog().unwrap();
        let mut output = Vec::new();
        InteractiveShell::new(
            catalog,
            Box::new(JsonFormatter::new()),
            Cursor::new("select ram ram-lpx-16\nsummary\n"),
            &mut output,
        )
        .run()
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("\"total\": 650000"));
    }
}
