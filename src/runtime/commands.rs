//! Line commands of the interactive shell.
//!
//! Each input line maps to one [`Command`]: most become an [`Event`] for the
//! handler, the rest drive history or the shell itself.

use crate::app::Event;
use crate::domain::error::{CatalogError, Result};
use crate::query::SortOption;

/// Usage text printed by `help`.
pub const HELP: &str = "\
commands:
  search [TEXT]              set the search term (empty clears it)
  category CODE|all          filter by ornament category
  purity VALUE|all           filter by purity
  stock on|off               toggle in-stock only
  sort featured|price-asc|price-desc
  clear                      reset search and filters
  page N | next | prev       change page
  open INDEX | close         open or close a product
  image N | image next|prev  browse the open product's gallery
  inquire | chat             WhatsApp inquiry or greeting
  fav INDEX                  mark or unmark a favorite
  back | forward             history navigation
  url | show | help | quit";

/// Parsed shell input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Forward to the event handler.
    Dispatch(Event),
    Back,
    Forward,
    /// Print the address bar.
    Url,
    /// Re-render the page.
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
///
/// # Errors
///
/// Returns [`CatalogError::Command`] for unknown commands and malformed
/// arguments.
///
/// # Example
///
/// ```rust
/// use dimoss_catalog::app::Event;
/// use dimoss_catalog::runtime::{parse_command, Command};
///
/// assert_eq!(
///     parse_command("category all")?,
///     Some(Command::Dispatch(Event::CategoryChanged(None)))
/// );
/// assert_eq!(parse_command("   ")?, None);
/// # Ok::<(), dimoss_catalog::CatalogError>(())
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match name {
        "search" | "s" => Command::Dispatch(Event::SearchChanged(rest.to_string())),
        "category" | "type" => Command::Dispatch(Event::CategoryChanged(selection(rest, "category")?)),
        "purity" => Command::Dispatch(Event::PurityChanged(selection(rest, "purity")?)),
        "stock" => Command::Dispatch(Event::InStockToggled(match rest {
            "on" | "true" | "1" => true,
            "off" | "false" | "0" => false,
            _ => return Err(invalid("stock expects on or off")),
        })),
        "sort" => Command::Dispatch(Event::SortChanged(
            rest.parse::<SortOption>()
                .map_err(|()| invalid(format!("unknown sort '{rest}'")))?,
        )),
        "clear" => Command::Dispatch(Event::ClearFilters),
        "page" => Command::Dispatch(Event::GoToPage(number(rest, "page")?)),
        "next" | "n" => Command::Dispatch(Event::NextPage),
        "prev" | "p" => Command::Dispatch(Event::PreviousPage),
        "open" | "o" => Command::Dispatch(Event::SelectProduct {
            index: number(rest, "open")?,
        }),
        "close" | "x" => Command::Dispatch(Event::CloseOverlay),
        "image" | "i" => Command::Dispatch(match rest {
            "next" => Event::NextImage,
            "prev" => Event::PreviousImage,
            _ => {
                let position: usize = number(rest, "image")?;
                if position == 0 {
                    return Err(invalid("images are numbered from 1"));
                }
                Event::ShowImage(position - 1)
            }
        }),
        "inquire" => Command::Dispatch(Event::Inquire),
        "chat" => Command::Dispatch(Event::Greet),
        "fav" | "favorite" => Command::Dispatch(Event::ToggleFavorite {
            index: number(rest, "fav")?,
        }),
        "back" | "b" => Command::Back,
        "forward" | "f" => Command::Forward,
        "url" => Command::Url,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(invalid(format!("unknown command '{other}' (try 'help')"))),
    };

    Ok(Some(command))
}

fn selection(value: &str, what: &str) -> Result<Option<String>> {
    match value {
        "" => Err(invalid(format!("{what} expects a value or 'all'"))),
        "all" => Ok(None),
        value => Ok(Some(value.to_string())),
    }
}

fn number<T: std::str::FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| invalid(format!("{what} expects a number, got '{value}'")))
}

fn invalid(message: impl Into<String>) -> CatalogError {
    CatalogError::Command(message.into())
}
