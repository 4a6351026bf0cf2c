//! On-screen keypad
//!
//! Buttons can be clicked with the mouse and light up when the matching key
//! is typed. The layout is the classic phone calculator grid with a double
//! width zero:
//!
//! ```text
//! [ AC  ] [ -/+ ] [  %  ] [  /  ]
//! [  7  ] [  8  ] [  9  ] [  ×  ]
//! [  4  ] [  5  ] [  6  ] [  -  ]
//! [  1  ] [  2  ] [  3  ] [  +  ]
//! [      0      ] [  .  ] [  =  ]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::core::{Button, ButtonRole, Digit, Operation};

/// Orange used for operator keys
pub const OPERATOR_COLOR: Color = Color::Rgb(255, 149, 0);
/// Light gray used for AC, -/+ and %
pub const FUNCTION_COLOR: Color = Color::Rgb(165, 165, 165);
/// Dark gray used for digits and the decimal point
pub const ENTRY_COLOR: Color = Color::Rgb(55, 55, 55);

/// A key placed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The button this key sends
    pub button: Button,
    /// Grid row
    pub row: usize,
    /// First grid column
    pub col: usize,
    /// Number of columns covered
    pub width: usize,
    /// Whether the key is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(button: Button, row: usize, col: usize) -> Self {
        Self {
            button,
            row,
            col,
            width: 1,
            pressed: false,
        }
    }

    fn wide(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Returns true if this key covers the given cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.width
    }

    /// Base style from the button's role
    #[must_use]
    pub fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.button.role() {
            ButtonRole::Operator => Style::default().fg(Color::White).bg(OPERATOR_COLOR),
            ButtonRole::Function => Style::default().fg(Color::Black).bg(FUNCTION_COLOR),
            ButtonRole::Entry => Style::default().fg(Color::White).bg(ENTRY_COLOR),
        }
    }
}

/// The keypad grid (5 rows x 4 columns)
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let digit = |d: usize| Button::Digit(Digit::ALL[d]);
        let op = Button::Operator;
        let layout: [[Option<Button>; 4]; 5] = [
            [
                Some(Button::Clear),
                Some(Button::Negate),
                Some(Button::Percent),
                Some(op(Operation::Divide)),
            ],
            [Some(digit(7)), Some(digit(8)), Some(digit(9)), Some(op(Operation::Multiply))],
            [Some(digit(4)), Some(digit(5)), Some(digit(6)), Some(op(Operation::Subtract))],
            [Some(digit(1)), Some(digit(2)), Some(digit(3)), Some(op(Operation::Add))],
            [Some(digit(0)), None, Some(Button::Decimal), Some(Button::Equals)],
        ];

        let mut buttons = Vec::with_capacity(19);
        for (row, keys) in layout.iter().enumerate() {
            for (col, key) in keys.iter().enumerate() {
                let Some(button) = *key else { continue };
                let mut placed = KeypadButton::new(button, row, col);
                // Zero spans the empty cell beside it
                if col + 1 < keys.len() && keys[col + 1].is_none() {
                    placed = placed.wide(2);
                }
                buttons.push(placed);
            }
        }

        Self {
            buttons,
            rows: layout.len(),
            cols: 4,
        }
    }

    /// Returns the number of keys
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a key by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the key covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.position_at(row, col).and_then(|i| self.buttons.get(i))
    }

    fn position_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Finds the index of a button
    #[must_use]
    pub fn find(&self, button: Button) -> Option<usize> {
        self.buttons.iter().position(|b| b.button == button)
    }

    /// Highlights a key by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.pressed = true;
        }
    }

    /// Releases all keys
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Highlights only the key for `button`
    pub fn highlight(&mut self, button: Button) {
        self.release_all();
        if let Some(idx) = self.find(button) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all keys
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Converts a click position to a key index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = inner_area(area);
        if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
            return None;
        }

        let (btn_width, btn_height) = self.cell_size(inner)?;
        let col = ((x - inner.x) / btn_width) as usize;
        let row = ((y - inner.y) / btn_height) as usize;

        if row < self.rows && col < self.cols {
            self.position_at(row, col)
        } else {
            None
        }
    }

    fn cell_size(&self, inner: Rect) -> Option<(u16, u16)> {
        let btn_width = inner.width / self.cols as u16;
        let btn_height = inner.height / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            None
        } else {
            Some((btn_width, btn_height))
        }
    }
}

/// Area inside the keypad border
fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let inner = inner_area(area);
        let Some((btn_width, btn_height)) = self.keypad.cell_size(inner) else {
            return; // Too small to render
        };

        for key in self.keypad.buttons() {
            let width = (btn_width * key.width as u16).saturating_sub(1).max(1);
            let rect = Rect {
                x: inner.x + key.col as u16 * btn_width,
                y: inner.y + key.row as u16 * btn_height,
                width,
                height: btn_height,
            };
            let style = key.style();
            buf.set_style(rect, style);

            let label = key.button.label();
            let label_width = label.chars().count() as u16;
            let label_x = rect.x + rect.width.saturating_sub(label_width) / 2;
            let label_y = rect.y + rect.height / 2;
            buf.set_stringn(label_x, label_y, label, rect.width as usize, style);
        }
    }
}
