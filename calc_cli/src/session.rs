//! Interactive calculator session.
//!
//! Reads one command per line and reprints the results after every input
//! change, the terminal counterpart of a form that recalculates as you type.

use std::io::{self, BufRead, Write};

use tracing::warn;

use calc_core::content::CalculatorContent;
use calc_core::format::summary;
use calc_core::{CalcError, CalcResult, Calculator, InputField};

use crate::render;

const HELP: &str = "\
Commands:
  <field> <value>       set an input (people, hours_per_week, cost_per_hour, automation_cost)
  set <field> <value>   same as above
  reset                 restore the default inputs
  show                  print inputs and results
  copy                  print the copyable summary
  json                  print inputs and results as JSON
  help                  this text
  quit                  leave";

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionCommand {
    Set(InputField, f64),
    Reset,
    Show,
    Copy,
    Json,
    Help,
    Quit,
}

/// Parse a command line. Blank lines parse to `None`.
pub fn parse_command(line: &str) -> CalcResult<Option<SessionCommand>> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(None);
    };

    let command = match first.to_ascii_lowercase().as_str() {
        "reset" => SessionCommand::Reset,
        "show" => SessionCommand::Show,
        "copy" => SessionCommand::Copy,
        "json" => SessionCommand::Json,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        "set" => {
            let field = words
                .next()
                .ok_or_else(|| CalcError::invalid_input("command", line.trim(), "Expected `set <field> <value>`"))?;
            parse_set(field, words.next(), line)?
        }
        _ => parse_set(first, words.next(), line)?,
    };

    if let Some(extra) = words.next() {
        return Err(CalcError::invalid_input("command", line.trim(), format!("Unexpected `{extra}`")));
    }
    Ok(Some(command))
}

fn parse_set(field: &str, value: Option<&str>, line: &str) -> CalcResult<SessionCommand> {
    let field: InputField = field.parse()?;
    let value = value.ok_or_else(|| {
        CalcError::invalid_input(field.as_str(), line.trim(), "Missing value")
    })?;
    Ok(SessionCommand::Set(field, field.parse_value(value)?))
}

/// A live session over one calculator.
pub struct Session<'a> {
    calculator: Calculator,
    content: &'a CalculatorContent,
}

impl<'a> Session<'a> {
    pub fn new(content: &'a CalculatorContent) -> Self {
        Session {
            calculator: Calculator::new(),
            content,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        write!(out, "{}", render::header(self.content))?;
        writeln!(out, "Type `help` for commands.")?;
        self.show(out)?;

        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(None) => continue,
                Ok(Some(SessionCommand::Quit)) => break,
                Ok(Some(command)) => self.apply(command, out)?,
                Err(e) => writeln!(out, "Error: {e}")?,
            }
        }
        Ok(())
    }

    /// Apply one command and print its output.
    pub fn apply<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> io::Result<()> {
        match command {
            SessionCommand::Set(field, value) => {
                if let Some(hint) = self.content.hint(field).filter(|h| !h.contains(value)) {
                    warn!(field = %field, value, min = hint.min, max = ?hint.max, "input outside suggested range");
                    writeln!(out, "Note: {} is outside the suggested range for {}", value, hint.label)?;
                }
                self.calculator.set_input(field, value);
                write!(out, "{}", render::results(self.content, &self.calculator.results()))?;
            }
            SessionCommand::Reset => {
                self.calculator.reset();
                writeln!(out, "{}", self.content.reset_button)?;
                self.show(out)?;
            }
            SessionCommand::Show => self.show(out)?,
            SessionCommand::Copy => {
                writeln!(out, "{}", summary(&self.calculator.results()))?;
                writeln!(out, "{}", self.content.copied_button)?;
            }
            SessionCommand::Json => {
                let payload = serde_json::json!({
                    "inputs": self.calculator.inputs(),
                    "results": self.calculator.results(),
                });
                let text = serde_json::to_string_pretty(&payload).map_err(io::Error::other)?;
                writeln!(out, "{text}")?;
            }
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => {}
        }
        Ok(())
    }

    fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", render::inputs(self.content, self.calculator.inputs()))?;
        write!(out, "{}", render::results(self.content, &self.calculator.results()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::content::site_content;
    use calc_core::CalculatorInputs;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(parse_command("reset").unwrap(), Some(SessionCommand::Reset));
        assert_eq!(parse_command("QUIT").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(
            parse_command("people 12").unwrap(),
            Some(SessionCommand::Set(InputField::People, 12.0))
        );
        assert_eq!(
            parse_command("set costPerHour 100").unwrap(),
            Some(SessionCommand::Set(InputField::CostPerHour, 100.0))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command("salary 10").unwrap_err().error_code(), "UNKNOWN_FIELD");
        assert_eq!(parse_command("people").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(parse_command("people ten").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(parse_command("set").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(parse_command("reset now").unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_session_script() {
        let content = site_content().unwrap();
        let mut session = Session::new(&content.calculator);
        let script = "cost_per_hour 100\n\nbogus 1\nautomation_cost 0\ncopy\nquit\npeople 99\n";
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();

        assert_eq!(*session.calculator().inputs(), CalculatorInputs::new(10.0, 15.0, 100.0, 0.0));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Error: Unknown field: bogus"));
        assert!(text.contains("First Year ROI: ∞%"));
        assert!(text.contains("Copied!"));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let content = site_content().unwrap();
        let mut session = Session::new(&content.calculator);
        let mut out = Vec::new();
        session.apply(SessionCommand::Set(InputField::People, 3.0), &mut out).unwrap();
        session.apply(SessionCommand::Reset, &mut out).unwrap();
        assert_eq!(*session.calculator().inputs(), CalculatorInputs::default());
    }

    #[test]
    fn test_out_of_range_is_accepted_with_note() {
        let content = site_content().unwrap();
        let mut session = Session::new(&content.calculator);
        let mut out = Vec::new();
        session.apply(SessionCommand::Set(InputField::People, 500.0), &mut out).unwrap();
        assert_eq!(session.calculator().inputs().people, 500.0);
        assert!(String::from_utf8(out).unwrap().contains("outside the suggested range"));
    }

    #[test]
    fn test_json_output() {
        let content = site_content().unwrap();
        let mut session = Session::new(&content.calculator);
        let mut out = Vec::new();
        session.apply(SessionCommand::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["inputs"]["people"], 10.0);
        assert_eq!(value["results"]["yearly_savings"], 351_000.0);
    }

    #[test]
    fn test_json_output_with_zero_automation_cost() {
        let content = site_content().unwrap();
        let mut session = Session::new(&content.calculator);
        let mut out = Vec::new();
        session.apply(SessionCommand::Set(InputField::AutomationCost, 0.0), &mut out).unwrap();
        out.clear();
        session.apply(SessionCommand::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value["results"]["first_year_roi"].is_null());
    }
}
