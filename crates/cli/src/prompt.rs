//! Interactive parameter collection.
//!
//! [`Prompter`] reads answers line by line from any [`BufRead`] and writes
//! questions to any [`Write`], so the same code drives a terminal session and
//! in-memory tests. Invalid answers are reported and asked again in a loop.

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

use lanchester_core::LawKind;
use thiserror::Error;

use crate::config::Scenario;

/// Errors that can occur while prompting.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read or write the terminal")]
    Io(#[from] io::Error),

    #[error("input ended before all parameters were collected")]
    EndOfInput,
}

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one trimmed line.
    fn read_line(&mut self) -> Result<String, PromptError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        Ok(line.trim().to_owned())
    }

    /// Shows the model menu until a valid law is chosen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or input ends.
    pub fn select_law(&mut self) -> Result<LawKind, PromptError> {
        loop {
            writeln!(
                self.output,
                "Select model (type number 1-3 and press Enter):\n"
            )?;
            for kind in LawKind::ALL {
                writeln!(self.output, "{} - {}", kind.menu_number(), menu_label(kind))?;
            }

            match self.read_line()?.parse::<LawKind>() {
                Ok(kind) => return Ok(kind),
                Err(err) => {
                    tracing::debug!(%err, "rejected model selection");
                    writeln!(self.output, "\nInvalid value. Please try again:\n")?;
                }
            }
        }
    }

    /// Asks for a value, keeping `current` when the answer is empty.
    ///
    /// Answers that fail to parse are rejected and the question is repeated.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or input ends.
    pub fn value<T>(&mut self, label: &str, current: T) -> Result<T, PromptError>
    where
        T: FromStr + Display + Copy,
    {
        loop {
            writeln!(self.output, "\nEnter {label}: [current: {current}]")?;
            let answer = self.read_line()?;

            let value = if answer.is_empty() {
                current
            } else if let Ok(value) = answer.parse::<T>() {
                value
            } else {
                writeln!(self.output, "Invalid value. Please try again.")?;
                continue;
            };

            writeln!(self.output, "Current value: {value}\n")?;
            return Ok(value);
        }
    }

    /// Collects the base parameters and the selected law's coefficients.
    ///
    /// Only coefficients the chosen law reads are asked for; every other
    /// field is carried over from `current`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or input ends.
    pub fn collect(&mut self, model: LawKind, current: &Scenario) -> Result<Scenario, PromptError> {
        let mut scenario = Scenario {
            model,
            ..*current
        };

        scenario.red = self.value("number of RED units", scenario.red)?;
        scenario.blue = self.value("number of BLUE units", scenario.blue)?;
        scenario.duration = self.value(
            "total number of steps in the simulation",
            scenario.duration,
        )?;
        scenario.dt = loop {
            let dt = self.value("time interval", scenario.dt)?;
            if dt > 0 {
                break dt;
            }
            writeln!(self.output, "Time interval must be greater than zero.")?;
        };

        if model.uses_linear_coefficients() {
            let linear = &mut scenario.linear;
            linear.r_l = self.value("combat efficiency of RED units", linear.r_l)?;
            linear.b_l = self.value("combat efficiency of BLUE units", linear.b_l)?;
        }

        if model.uses_square_coefficients() {
            let square = &mut scenario.square;
            square.r_s = self.value(
                "average number of RED units that damage each other per unit of time",
                square.r_s,
            )?;
            square.b_s = self.value(
                "average number of BLUE units that damage each other per unit of time",
                square.b_s,
            )?;
        }

        if model == LawKind::Modernized {
            let modernized = &mut scenario.modernized;
            modernized.r_f = self.value("RED units camouflage ability factor", modernized.r_f)?;
            modernized.b_f = self.value("BLUE units camouflage ability factor", modernized.b_f)?;
            modernized.r_a = self.value("RED units ability to recognize", modernized.r_a)?;
            modernized.b_a = self.value("BLUE units ability to recognize", modernized.b_a)?;
            modernized.r_i = self.value(
                "RED units information warfare ability coefficient",
                modernized.r_i,
            )?;
            modernized.b_i = self.value(
                "BLUE units information warfare ability coefficient",
                modernized.b_i,
            )?;
        }

        Ok(scenario)
    }

    /// Asks whether to run with the collected parameters.
    ///
    /// Returns `false` when the user wants to go back and correct them.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or input ends.
    pub fn confirm(&mut self) -> Result<bool, PromptError> {
        writeln!(
            self.output,
            "[OK] All parameters are collected.\nDo you want to predict battle result now?\n\n\
             Type any key to continue and predict or 'N' to come back and correct input parameters"
        )?;
        let answer = self.read_line()?;
        Ok(!matches!(answer.as_str(), "N" | "n" | "no"))
    }

    /// Asks whether to run another simulation.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails. End of input counts as "no".
    pub fn try_again(&mut self) -> Result<bool, PromptError> {
        writeln!(
            self.output,
            "\n\n[FINISHED] Do you want to try again?\n\n\
             Type 'Y' to try again or any other key to exit"
        )?;
        match self.read_line() {
            Ok(answer) => Ok(matches!(answer.as_str(), "Y" | "y" | "yes")),
            Err(PromptError::EndOfInput) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Runs the select, collect, and confirm loop until the user confirms.
    ///
    /// Values entered in a rejected round become the defaults for the next.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or input ends.
    pub fn scenario(&mut self, current: &Scenario) -> Result<Scenario, PromptError> {
        let mut scenario = *current;
        loop {
            let model = self.select_law()?;
            scenario = self.collect(model, &scenario)?;
            if self.confirm()? {
                return Ok(scenario);
            }
        }
    }
}

fn menu_label(kind: LawKind) -> &'static str {
    match kind {
        LawKind::Square => "square law",
        LawKind::Linear => "linear law",
        LawKind::Modernized => "modernized model",
    }
}
