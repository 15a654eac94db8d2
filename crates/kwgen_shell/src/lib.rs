//! Mostly derived from [cargo](https://github.com/rust-lang/cargo) source code.

pub mod styles;

use crate::styles::{ERROR, HEADER};
use anstream::{AutoStream, ColorChoice};
use anstyle::Style;
use anyhow::Result;
use std::{
    fmt,
    io::{Stderr, Stdout, Write},
};

#[derive(Debug)]
pub struct ShellOutput {
    pub stdout: AutoStream<Stdout>,
    pub stderr: AutoStream<Stderr>,
    pub color: ColorChoice,
}

impl ShellOutput {
    pub fn stdout(&mut self) -> &mut AutoStream<Stdout> {
        &mut self.stdout
    }

    pub fn stderr(&mut self) -> &mut AutoStream<Stderr> {
        &mut self.stderr
    }
}

#[derive(Debug)]
pub struct Shell {
    pub output: ShellOutput,
}

impl Shell {
    pub fn new(color_choice: ColorChoice) -> Self {
        let output = ShellOutput {
            stdout: AutoStream::new(std::io::stdout(), color_choice),
            stderr: AutoStream::new(std::io::stderr(), color_choice),
            color: color_choice,
        };

        Self { output }
    }

    pub fn print(
        &mut self,
        status: &dyn fmt::Display,
        message: Option<&dyn fmt::Display>,
        style: &Style,
        justified: bool,
    ) -> Result<()> {
        let buffer = self.write(status, message, style, justified)?;
        self.output.stderr().write_all(buffer.as_bytes())?;
        Ok(())
    }

    pub fn write(
        &self,
        status: &dyn fmt::Display,
        message: Option<&dyn fmt::Display>,
        style: &Style,
        justified: bool,
    ) -> Result<String> {
        let dim = anstyle::Style::new() | anstyle::Effects::DIMMED;

        let mut buffer = Vec::new();
        if justified {
            write!(&mut buffer, "{style}{status:>13}{style:#}")?;
        } else {
            write!(&mut buffer, "{style}{status}{style:#}{dim}:{dim:#}")?;
        }
        match message {
            Some(message) => writeln!(buffer, " {message}")?,
            None => write!(buffer, " ")?,
        }
        Ok(String::from_utf8(buffer)?)
    }

    pub fn error<T: fmt::Display>(&mut self, message: T) -> Result<()> {
        self.print(&"error", Some(&message), &ERROR, false)
    }

    pub fn status<T, U>(&mut self, status: T, message: U) -> Result<()>
    where
        T: fmt::Display,
        U: fmt::Display,
    {
        self.print(&status, Some(&message), &HEADER, true)
    }

    /// Writes `message` as-is to stdout, or to stderr when `err` is set.
    pub fn cond_print<T: fmt::Display>(&mut self, message: T, err: bool) -> Result<()> {
        if err {
            self.output.stderr().write_all(format!("{}", message).as_bytes())?;
        } else {
            self.output.stdout().write_all(format!("{}", message).as_bytes())?;
        }
        Ok(())
    }
}
