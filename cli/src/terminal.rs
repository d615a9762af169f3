//! `RoomTypeView` that draws to a text stream.
//!
//! Output is append-only, so "replace the list" means printing the new list
//! and scrolling is a no-op.

use std::io::{BufRead, Write};

use room_type_core::{Placeholder, RoomTypeForm, RoomTypeRow, RoomTypeView};

pub struct TerminalView<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            assume_yes: false,
        }
    }

    /// Answer every confirmation with yes without prompting.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // Write failures on a terminal have nowhere better to go.
    fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            tracing::warn!(error = %err, "failed to write to terminal");
        }
    }
}

impl<R: BufRead, W: Write> RoomTypeView for TerminalView<R, W> {
    fn render_rows(&mut self, rows: &[RoomTypeRow]) {
        for row in rows {
            self.line(&format!("{} (ID: {})", row.name, row.id));
            self.line(&format!("  {}", row.description));
            self.line(&format!("  Capacity: {}", row.capacity));
            self.line(&format!("  Rate: {}", row.rate));
        }
    }

    fn render_placeholder(&mut self, placeholder: Placeholder) {
        self.line(placeholder.text());
    }

    fn render_form(&mut self, form: &RoomTypeForm) {
        self.line(&format!("== {} ==", form.title()));
        self.line(&format!("  id:          {}", form.hidden_id()));
        self.line(&format!("  name:        {}", form.name));
        self.line(&format!("  description: {}", form.description));
        self.line(&format!("  capacity:    {}", form.capacity));
        self.line(&format!("  rate:        {}", form.rate));
    }

    fn alert(&mut self, message: &str) {
        self.line(&format!("! {message}"));
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if let Err(err) = write!(self.output, "{message} [y/N] ").and_then(|()| self.output.flush()) {
            tracing::warn!(error = %err, "failed to write prompt");
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read confirmation");
                false
            }
        }
    }

    fn scroll_to_top(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(input: &str) -> TerminalView<&[u8], Vec<u8>> {
        TerminalView::new(input.as_bytes(), Vec::new())
    }

    fn output(view: TerminalView<&[u8], Vec<u8>>) -> String {
        String::from_utf8(view.into_output()).unwrap()
    }

    #[test]
    fn rows_print_every_field() {
        let mut v = view("");
        v.render_rows(&[RoomTypeRow {
            id: 3,
            name: "Suite".to_string(),
            description: "Ocean view".to_string(),
            capacity: "2 guests".to_string(),
            rate: "R$ 350.00".to_string(),
        }]);
        let out = output(v);
        assert!(out.contains("Suite (ID: 3)"));
        assert!(out.contains("Ocean view"));
        assert!(out.contains("Capacity: 2 guests"));
        assert!(out.contains("Rate: R$ 350.00"));
    }

    #[test]
    fn placeholder_prints_its_text() {
        let mut v = view("");
        v.render_placeholder(Placeholder::Empty);
        assert_eq!(output(v), "No room types registered.\n");
    }

    #[test]
    fn confirm_accepts_yes_variants_only() {
        assert!(view("y\n").confirm("go?"));
        assert!(view("YES\n").confirm("go?"));
        assert!(!view("n\n").confirm("go?"));
        assert!(!view("\n").confirm("go?"));
        assert!(!view("").confirm("go?"));
    }

    #[test]
    fn assume_yes_skips_the_prompt() {
        let mut v = view("").assume_yes(true);
        assert!(v.confirm("go?"));
        assert_eq!(output(v), "");
    }

    #[test]
    fn form_shows_empty_hidden_id_in_create_mode() {
        let mut v = view("");
        v.render_form(&RoomTypeForm::new());
        let out = output(v);
        assert!(out.contains("== Add new room type =="));
        assert!(out.contains("  id:          \n"));
    }
}
