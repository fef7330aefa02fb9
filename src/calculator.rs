//! Four-function calculator engine
//!
//! Accumulator style: digits build the display text, choosing an
//! operation folds any pending one into the running value, equals
//! resolves and clears the pending state. No operator precedence.

/// Binary operation between the running value and the current entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    fn apply(self, first: f64, second: f64) -> f64 {
        match self {
            Operation::Add => first + second,
            Operation::Subtract => first - second,
            Operation::Multiply => first * second,
            // Dividing by zero shows 0 rather than an error state.
            Operation::Divide => {
                if second != 0.0 {
                    first / second
                } else {
                    0.0
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    previous: Option<f64>,
    operation: Option<Operation>,
    waiting_for_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            previous: None,
            operation: None,
            waiting_for_operand: false,
        }
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Appends a digit to the entry, or starts a new entry after an
    /// operation or equals. Non-digit characters are ignored.
    pub fn press_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }

        if self.waiting_for_operand {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    /// Starts the fractional part; a second press within one entry does
    /// nothing.
    pub fn press_decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Selects the next operation, folding the pending one first:
    /// `2 + 3 ×` leaves 5 on display with `×` pending.
    pub fn press_operation(&mut self, operation: Operation) {
        let input = self.current_value();

        match (self.previous, self.operation) {
            (None, _) => self.previous = Some(input),
            (Some(prev), Some(op)) => {
                let value = op.apply(prev, input);
                self.display = format_value(value);
                self.previous = Some(value);
            }
            (Some(_), None) => {}
        }

        self.waiting_for_operand = true;
        self.operation = Some(operation);
    }

    /// Resolves the pending operation. Without one this does nothing.
    pub fn press_equals(&mut self) {
        if let (Some(prev), Some(op)) = (self.previous, self.operation) {
            let value = op.apply(prev, self.current_value());
            self.display = format_value(value);
            self.previous = None;
            self.operation = None;
            self.waiting_for_operand = true;
        }
    }

    /// Resets everything to the initial state.
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.previous = None;
        self.operation = None;
        self.waiting_for_operand = false;
    }

    fn current_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}

fn format_value(value: f64) -> String {
    value.to_string()
}
