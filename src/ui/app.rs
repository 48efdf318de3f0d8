//! Main TUI application state and logic

use super::menu::{parse_decimal, parse_integer, MenuCommand, MENU};
use super::panes::InventoryStats;
use crate::catalog::StockUpdate;
use crate::console::OutputLog;
use crate::inventory::{Inventory, InventoryError};
use crate::records::{Product, Stock, Supplier};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Menu,
    Output,
}

impl FocusedPane {
    pub fn toggle(self) -> Self {
        match self {
            FocusedPane::Menu => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Menu,
        }
    }
}

/// Answers collected so far for a command that prompts for input
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub command: MenuCommand,
    pub answers: Vec<String>,
}

/// What the prompt line is currently reading
#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    /// A menu number (or Enter for the selected entry)
    Command,
    /// The next field of a command's input sequence
    Form(FormState),
}

/// The main application state
pub struct App {
    /// The inventory being edited
    pub inventory: Inventory,

    /// Everything printed by commands
    pub output: OutputLog,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index into [`MENU`] of the highlighted entry
    pub selected: usize,

    /// Text typed on the prompt line
    pub input: String,

    pub mode: InputMode,

    /// Output pane scroll offset (`usize::MAX` sticks to the bottom)
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the last command failed
    pub last_failed: bool,
}

impl App {
    pub fn new(inventory: Inventory) -> Self {
        App {
            inventory,
            output: OutputLog::new(),
            focused_pane: FocusedPane::Menu,
            selected: 0,
            input: String::new(),
            mode: InputMode::Command,
            output_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_failed: false,
        }
    }

    /// Run the TUI application until the Exit command
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, then the prompt box and the status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(36), Constraint::Min(0)])
            .split(main_chunks[0]);

        super::panes::render_menu_pane(
            frame,
            columns[0],
            self.selected,
            self.focused_pane == FocusedPane::Menu,
        );

        super::panes::render_output_pane(
            frame,
            columns[1],
            &self.output,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        let (title, prompt) = self.prompt_text();
        super::panes::render_prompt(frame, main_chunks[1], &title, prompt, &self.input);

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.stats(),
            self.last_failed,
            matches!(self.mode, InputMode::Form(_)),
        );
    }

    fn prompt_text(&self) -> (String, &'static str) {
        match &self.mode {
            InputMode::Command => ("Command".to_string(), "Enter your choice"),
            InputMode::Form(form) => {
                let fields = form.command.fields();
                let step = form.answers.len();
                let prompt = fields.get(step).map(|f| f.prompt).unwrap_or("");
                (
                    format!(
                        "{}. {} ({}/{})",
                        form.command.number(),
                        form.command.label(),
                        step + 1,
                        fields.len()
                    ),
                    prompt,
                )
            }
        }
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats {
            products: self.inventory.products().count(),
            tree_depth: self.inventory.products().depth(),
            suppliers: self.inventory.suppliers().count(),
            stocks: self.inventory.stocks().count(),
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.toggle();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Menu => {
                    self.selected = self.selected.checked_sub(1).unwrap_or(MENU.len() - 1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Menu => {
                    self.selected = (self.selected + 1) % MENU.len();
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
            },
            KeyCode::PageUp => {
                self.output_scroll = self.output_scroll.saturating_sub(10);
            }
            KeyCode::PageDown => {
                self.output_scroll = self.output_scroll.saturating_add(10);
            }
            KeyCode::Esc => {
                self.input.clear();
                if let InputMode::Form(form) = &self.mode {
                    self.status_message = format!("{} cancelled", form.command.label());
                    self.last_failed = false;
                    self.mode = InputMode::Command;
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                match std::mem::replace(&mut self.mode, InputMode::Command) {
                    InputMode::Command => self.submit_choice(&line),
                    InputMode::Form(form) => self.submit_answer(form, line),
                }
            }
            _ => {}
        }
    }

    /// Handle Enter on the command prompt
    fn submit_choice(&mut self, line: &str) {
        let command = if line.trim().is_empty() {
            Some(MENU[self.selected])
        } else {
            line.trim()
                .parse::<i64>()
                .ok()
                .and_then(MenuCommand::from_choice)
        };

        match command {
            Some(command) => {
                if let Some(i) = MENU.iter().position(|c| *c == command) {
                    self.selected = i;
                }
                self.start(command);
            }
            None => {
                self.output.print("Invalid choice. Please try again.");
                self.status_message = "Invalid choice".to_string();
                self.last_failed = true;
                self.output_scroll = usize::MAX;
            }
        }
    }

    fn start(&mut self, command: MenuCommand) {
        self.output
            .heading(format!("> {}. {}", command.number(), command.label()));
        if command.fields().is_empty() {
            let outcome = self.execute(command, &[]);
            self.finish(outcome);
        } else {
            self.status_message = format!("{}: answer the prompts", command.label());
            self.last_failed = false;
            self.mode = InputMode::Form(FormState {
                command,
                answers: Vec::new(),
            });
        }
        self.output_scroll = usize::MAX;
    }

    /// Handle Enter while a command is collecting input
    fn submit_answer(&mut self, mut form: FormState, answer: String) {
        let fields = form.command.fields();
        let Some(field) = fields.get(form.answers.len()) else {
            return;
        };
        self.output.print(format!("{}: {}", field.prompt, answer));
        self.output_scroll = usize::MAX;

        if let Err(err) = field.validate(&answer) {
            self.output.error(&err.to_string());
            self.finish(Err(err));
            return;
        }

        form.answers.push(answer);
        if form.answers.len() == fields.len() {
            let outcome = self.execute(form.command, &form.answers);
            self.finish(outcome);
        } else {
            self.mode = InputMode::Form(form);
        }
    }

    /// Update the status bar after a command ran (or failed to)
    fn finish(&mut self, outcome: Result<String, InventoryError>) {
        match outcome {
            Ok(status) => {
                self.status_message = status;
                self.last_failed = false;
            }
            Err(err) => {
                self.status_message = err.to_string();
                self.last_failed = true;
            }
        }
        self.output_scroll = usize::MAX;
    }

    /// Run a command with its (already validated) answers.
    ///
    /// Successful commands return a status line. Errors are printed to the
    /// output log here and returned for the status bar.
    fn execute(
        &mut self,
        command: MenuCommand,
        answers: &[String],
    ) -> Result<String, InventoryError> {
        let result = self.dispatch(command, answers);
        if let Err(err) = &result {
            self.output.error(&err.to_string());
        }
        result
    }

    fn dispatch(
        &mut self,
        command: MenuCommand,
        answers: &[String],
    ) -> Result<String, InventoryError> {
        let fields = command.fields();
        let int = |i: usize| parse_integer(fields[i].prompt, &answers[i]);

        match command {
            MenuCommand::AddProduct => {
                let product = Product::new(
                    int(0)?,
                    answers[1].clone(),
                    parse_decimal(fields[2].prompt, &answers[2])?,
                    answers[3].clone(),
                );
                self.inventory.add_product(product)?;
                self.output.success("Product added successfully.");
                Ok("Product added".to_string())
            }
            MenuCommand::DisplayProducts => {
                let products = self.inventory.products().inorder();
                if products.is_empty() {
                    self.output.print("No products to display.");
                } else {
                    self.output.heading("--- Products List ---");
                    for product in &products {
                        self.output.print(product.to_string());
                    }
                    self.output.heading("------------------------------");
                }
                Ok(format!("{} product(s)", products.len()))
            }
            MenuCommand::SearchProduct => {
                let id = int(0)?;
                match self.inventory.find_product(id) {
                    Some(product) => {
                        self.output.print(product.to_string());
                        if let Some((rank, total)) = self.inventory.product_rank(id) {
                            self.output
                                .print(format!("Position {} of {} in ID order.", rank, total));
                        }
                        Ok(format!("Found product {}", id))
                    }
                    None => {
                        self.output.print("Product not found.");
                        Ok(format!("Product {} not found", id))
                    }
                }
            }
            MenuCommand::RemoveProduct => {
                let removed = self.inventory.remove_product(int(0)?)?;
                self.output.success("Product removed successfully.");
                Ok(format!("Removed product {}", removed.id))
            }
            MenuCommand::AddSupplier => {
                let supplier = Supplier::new(int(0)?, answers[1].clone(), answers[2].clone());
                self.inventory.add_supplier(supplier)?;
                self.output.success("Supplier added successfully.");
                Ok("Supplier added".to_string())
            }
            MenuCommand::DisplaySuppliers => {
                let suppliers = self.inventory.suppliers().collect();
                if suppliers.is_empty() {
                    self.output.print("No suppliers to display.");
                } else {
                    self.output.heading("--- Suppliers List ---");
                    for supplier in &suppliers {
                        self.output.print(supplier.to_string());
                    }
                    self.output.heading("----------------------");
                }
                Ok(format!("{} supplier(s)", suppliers.len()))
            }
            MenuCommand::SearchSupplier => {
                let id = int(0)?;
                match self.inventory.find_supplier(id) {
                    Some(supplier) => {
                        self.output.print(supplier.to_string());
                        if let Some((rank, total)) = self.inventory.supplier_rank(id) {
                            self.output
                                .print(format!("Position {} of {} in ID order.", rank, total));
                        }
                        Ok(format!("Found supplier {}", id))
                    }
                    None => {
                        self.output.print("Supplier not found.");
                        Ok(format!("Supplier {} not found", id))
                    }
                }
            }
            MenuCommand::AddStock => {
                let stock = Stock::new(int(0)?, int(1)?, int(2)?);
                match self.inventory.add_stock(stock)? {
                    StockUpdate::Inserted => {
                        self.output.success("Stock added successfully.");
                    }
                    StockUpdate::Merged { quantity } => {
                        self.output.success(format!(
                            "Stock updated successfully. Quantity is now {}.",
                            quantity
                        ));
                    }
                }
                Ok("Stock added/updated".to_string())
            }
            MenuCommand::DisplayStocks => {
                let stocks = self.inventory.stocks().collect();
                if stocks.is_empty() {
                    self.output.print("No stock records to display.");
                } else {
                    self.output.heading("--- Stock List ---");
                    for stock in &stocks {
                        self.output.print(stock.to_string());
                    }
                    self.output.heading("------------------");
                }
                Ok(format!("{} stock record(s)", stocks.len()))
            }
            MenuCommand::SortProducts => {
                let sorted = self.inventory.sorted_products();
                if sorted.is_empty() {
                    self.output.print("No products to sort.");
                } else {
                    self.output.heading("--- Products Sorted by ID ---");
                    for product in &sorted {
                        self.output.print(product.to_string());
                    }
                    self.output.heading("-----------------------------");
                }
                Ok("Products sorted".to_string())
            }
            MenuCommand::SortStocks => {
                let sorted = self.inventory.stocks_by_quantity();
                if sorted.is_empty() {
                    self.output.print("No stocks to sort.");
                } else {
                    self.output.heading("--- Stocks Sorted by Quantity ---");
                    for stock in &sorted {
                        self.output.print(stock.to_string());
                    }
                    self.output.heading("----------------------------------------");
                }
                Ok("Stocks sorted".to_string())
            }
            MenuCommand::SortSuppliers => {
                let sorted = self.inventory.sorted_suppliers();
                if sorted.is_empty() {
                    self.output.print("No suppliers to sort.");
                } else {
                    self.output.heading("--- Suppliers Sorted by ID ---");
                    for supplier in &sorted {
                        self.output.print(supplier.to_string());
                    }
                    self.output.heading("------------------------------");
                }
                Ok("Suppliers sorted".to_string())
            }
            MenuCommand::SaveAll => {
                let saved = self.inventory.save_all()?;
                self.output.success("Data saved successfully.");
                Ok(format!(
                    "Saved {} products, {} suppliers, {} stock records",
                    saved.products, saved.suppliers, saved.stocks
                ))
            }
            MenuCommand::LoadAll => {
                let loaded = self.inventory.load_all()?;
                for warning in loaded.warnings() {
                    self.output.warning(warning.to_string());
                }
                self.output.success("Data loaded successfully.");
                Ok(format!(
                    "Loaded {} products, {} suppliers, {} stock records",
                    self.inventory.products().count(),
                    self.inventory.suppliers().count(),
                    self.inventory.stocks().count()
                ))
            }
            MenuCommand::Exit => {
                self.output.print("Exiting program.");
                self.should_quit = true;
                Ok("Goodbye".to_string())
            }
        }
    }
}
