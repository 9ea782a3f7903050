use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    /// Dispatch on the operator lexeme carried by the instruction.
    pub fn binary(op: &str, lhs: Val, rhs: Val) -> Result<Val> {
        match op {
            "+" => Operation::sum(lhs, rhs),
            "-" => Operation::subtract(lhs, rhs),
            "*" => Operation::multiply(lhs, rhs),
            "/" => Operation::divide(lhs, rhs),
            "^" => Operation::power(lhs, rhs),
            "==" => Operation::equal(lhs, rhs),
            "!=" => Operation::not_equal(lhs, rhs),
            "<" => Operation::less(lhs, rhs),
            "<=" => Operation::less_equal(lhs, rhs),
            ">" => Operation::less(rhs, lhs),
            ">=" => Operation::less_equal(rhs, lhs),
            _ => Err(error!(InternalError; format!("UNKNOWN OPERATOR {}", op))),
        }
    }

    pub fn negate(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => match n.checked_neg() {
                Some(n) => Ok(Integer(n)),
                None => Err(error!(Overflow)),
            },
            Float(n) => Ok(Float(-n)),
            Boolean(_) | Text(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Text(l) => match rhs {
                Text(r) => Ok(Text((l.to_string() + &r).into())),
                _ => Err(error!(TypeMismatch)),
            },
            Integer(l) => match rhs {
                Integer(r) => match l.checked_add(r) {
                    Some(i) => Ok(Integer(i)),
                    None => Err(error!(Overflow)),
                },
                Float(r) => Ok(Float(l as f64 + r)),
                _ => Err(error!(TypeMismatch)),
            },
            Float(l) => match rhs {
                Integer(r) => Ok(Float(l + r as f64)),
                Float(r) => Ok(Float(l + r)),
                _ => Err(error!(TypeMismatch)),
            },
            Boolean(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Integer(l) => match rhs {
                Integer(r) => match l.checked_sub(r) {
                    Some(i) => Ok(Integer(i)),
                    None => Err(error!(Overflow)),
                },
                Float(r) => Ok(Float(l as f64 - r)),
                _ => Err(error!(TypeMismatch)),
            },
            Float(l) => match rhs {
                Integer(r) => Ok(Float(l - r as f64)),
                Float(r) => Ok(Float(l - r)),
                _ => Err(error!(TypeMismatch)),
            },
            Boolean(_) | Text(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Integer(l) => match rhs {
                Integer(r) => match l.checked_mul(r) {
                    Some(i) => Ok(Integer(i)),
                    None => Err(error!(Overflow)),
                },
                Float(r) => Ok(Float(l as f64 * r)),
                _ => Err(error!(TypeMismatch)),
            },
            Float(l) => match rhs {
                Integer(r) => Ok(Float(l * r as f64)),
                Float(r) => Ok(Float(l * r)),
                _ => Err(error!(TypeMismatch)),
            },
            Boolean(_) | Text(_) => Err(error!(TypeMismatch)),
        }
    }

    /// Division always yields a float.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let l = Operation::number(lhs)?;
        let r = Operation::number(rhs)?;
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Float(l / r))
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        if let (Integer(l), Integer(r)) = (&lhs, &rhs) {
            if let Ok(exp) = u32::try_from(*r) {
                return match l.checked_pow(exp) {
                    Some(i) => Ok(Integer(i)),
                    None => Err(error!(Overflow)),
                };
            }
        }
        let l = Operation::number(lhs)?;
        let r = Operation::number(rhs)?;
        if l == 0.0 && r < 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Float(l.powf(r)))
    }

    fn number(val: Val) -> Result<f64> {
        match val {
            Val::Integer(n) => Ok(n as f64),
            Val::Float(n) => Ok(n),
            Val::Boolean(_) | Val::Text(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        if let (Val::Boolean(l), Val::Boolean(r)) = (&lhs, &rhs) {
            return Ok(Val::Boolean(l == r));
        }
        Ok(Val::Boolean(
            Operation::compare(lhs, rhs)? == Some(Ordering::Equal),
        ))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        if let (Val::Boolean(l), Val::Boolean(r)) = (&lhs, &rhs) {
            return Ok(Val::Boolean(l != r));
        }
        Ok(Val::Boolean(
            Operation::compare(lhs, rhs)? != Some(Ordering::Equal),
        ))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(
            Operation::compare(lhs, rhs)? == Some(Ordering::Less),
        ))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(matches!(
            Operation::compare(lhs, rhs)?,
            Some(Ordering::Less) | Some(Ordering::Equal)
        )))
    }

    /// `None` when a float operand is NaN.
    fn compare(lhs: Val, rhs: Val) -> Result<Option<Ordering>> {
        use Val::*;
        match lhs {
            Integer(l) => match rhs {
                Integer(r) => Ok(Some(l.cmp(&r))),
                Float(r) => Ok((l as f64).partial_cmp(&r)),
                _ => Err(error!(TypeMismatch)),
            },
            Float(l) => match rhs {
                Integer(r) => Ok(l.partial_cmp(&(r as f64))),
                Float(r) => Ok(l.partial_cmp(&r)),
                _ => Err(error!(TypeMismatch)),
            },
            Text(l) => match rhs {
                Text(r) => Ok(Some(l.cmp(&r))),
                _ => Err(error!(TypeMismatch)),
            },
            Boolean(_) => Err(error!(TypeMismatch)),
        }
    }
}
