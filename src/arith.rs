use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot divide by zero!")]
pub struct DivisionByZero;

pub fn add(x: f64, y: f64) -> f64 { x + y }

pub fn subtract(x: f64, y: f64) -> f64 { x - y }

pub fn multiply(x: f64, y: f64) -> f64 { x * y }

/// Fails only when `y` is exactly zero, of either sign.
pub fn divide(x: f64, y: f64) -> Result<f64, DivisionByZero> {
    if y == 0.0 {
        Err(DivisionByZero)
    } else {
        Ok(x / y)
    }
}

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Subtract => "-",
            Op::Multiply => "*",
            Op::Divide => "/",
        }
    }

    pub fn from_choice(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Op::Add),
            "2" => Some(Op::Subtract),
            "3" => Some(Op::Multiply),
            "4" => Some(Op::Divide),
            _ => None,
        }
    }

    pub fn apply(self, x: f64, y: f64) -> Result<f64, DivisionByZero> {
        match self {
            Op::Add => Ok(add(x, y)),
            Op::Subtract => Ok(subtract(x, y)),
            Op::Multiply => Ok(multiply(x, y)),
            Op::Divide => divide(x, y),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        fmtr.write_str(self.symbol())
    }
}
