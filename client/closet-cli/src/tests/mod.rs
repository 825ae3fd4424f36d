mod cli_parsing;
mod error;
mod terminal;
