//! Interactive prompt mode.
//!
//! Each menu input is resolved into a choice enum once, then dispatched
//! through an exhaustive match. All prompt I/O lives here; the store only
//! sees resolved values.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use eyre::{Context, Result, bail};
use todor::{Todo, TodoStore};

/// Top-level menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Read,
    Delete,
}

impl MenuChoice {
    /// Resolve a menu input by its lowercased first letter.
    pub fn parse(input: &str) -> Option<Self> {
        match first_letter(input)? {
            'a' => Some(Self::Add),
            'r' => Some(Self::Read),
            'd' => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Read menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadChoice {
    All,
    One,
    Count,
}

impl ReadChoice {
    /// Resolve a read-menu input by its lowercased first letter.
    pub fn parse(input: &str) -> Option<Self> {
        match first_letter(input)? {
            'a' => Some(Self::All),
            'o' => Some(Self::One),
            'c' => Some(Self::Count),
            _ => None,
        }
    }
}

/// Delete menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteChoice {
    All,
    One,
}

impl DeleteChoice {
    /// Resolve a delete-menu input by its lowercased first letter.
    pub fn parse(input: &str) -> Option<Self> {
        match first_letter(input)? {
            'a' => Some(Self::All),
            'o' => Some(Self::One),
            _ => None,
        }
    }
}

/// Run one interactive session against the given store.
pub fn run(store: &TodoStore) -> Result<()> {
    match resolve_choice("(a)dd, (r)ead, (d)elete: ", MenuChoice::parse)? {
        MenuChoice::Add => interactive_add(store),
        MenuChoice::Read => interactive_read(store),
        MenuChoice::Delete => interactive_delete(store),
    }
}

fn interactive_add(store: &TodoStore) -> Result<()> {
    let title = prompt("Title: ")?;
    let due_input = prompt("Due Date: ")?;
    let due_date = if due_input.is_empty() {
        None
    } else {
        let date: NaiveDate = due_input
            .parse()
            .with_context(|| format!("Invalid due date: {due_input}"))?;
        Some(date)
    };

    store.append(&Todo::new(title, due_date))?;
    Ok(())
}

fn interactive_read(store: &TodoStore) -> Result<()> {
    match resolve_choice("(a)ll, (o)ne, (c)ount: ", ReadChoice::parse)? {
        ReadChoice::All => {
            for line in store.list_all()? {
                println!("{line}");
            }
        }
        ReadChoice::One => {
            let position = prompt_position()?;
            if let Some(line) = store.read_at(position)? {
                println!("{line}");
            }
        }
        ReadChoice::Count => {
            println!("{}", store.count()?);
        }
    }
    Ok(())
}

fn interactive_delete(store: &TodoStore) -> Result<()> {
    match resolve_choice("(a)ll, (o)ne: ", DeleteChoice::parse)? {
        DeleteChoice::All => store.delete_all(true)?,
        DeleteChoice::One => {
            let position = prompt_position()?;
            store.delete_at(position)?;
        }
    }
    Ok(())
}

/// Print a prompt label and read one trimmed line from stdin.
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt for a menu choice and resolve it, failing on unknown input.
fn resolve_choice<T>(label: &str, parse: fn(&str) -> Option<T>) -> Result<T> {
    let input = prompt(label)?;
    match parse(&input) {
        Some(choice) => Ok(choice),
        None => bail!("Unknown choice: {input}"),
    }
}

/// Prompt for a 1-based record position.
fn prompt_position() -> Result<usize> {
    let input = prompt("Number: ")?;
    let position: usize = input
        .parse()
        .with_context(|| format!("'{input}' is not a number"))?;
    if position == 0 {
        bail!("positions start at 1");
    }
    Ok(position)
}

fn first_letter(input: &str) -> Option<char> {
    input.trim().chars().next().map(|c| c.to_ascii_lowercase())
}
