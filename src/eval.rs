use crate::{
    ast::{BinOp, Exp, ExpList, Stm},
    env::Env,
    error::Error,
};
use std::io::{self, Write};

pub struct Interpreter<W> {
    env: Env,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn with_output(out: W) -> Self {
        Self {
            env: Env::new(),
            out,
        }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn into_env(self) -> Env {
        self.env
    }

    pub fn exec_stm(&mut self, stm: &Stm) -> Result<(), Error> {
        match stm {
            Stm::Compound(s1, s2) => {
                self.exec_stm(s1)?;
                self.exec_stm(s2)
            }
            Stm::Assign { id, exp } => {
                let val = self.eval_exp(exp)?;
                self.env.update(id, val);
                Ok(())
            }
            Stm::Print(args) => self.exec_print(args),
        }
    }

    // Each value is written as soon as its argument is evaluated, so the
    // write order matches the evaluation order even when a later
    // argument's Eseq effect prints on its own.
    fn exec_print(&mut self, args: &ExpList) -> Result<(), Error> {
        for (i, arg) in args.iter().enumerate() {
            let val = self.eval_exp(arg)?;
            if i > 0 {
                write!(self.out, " ")?;
            }
            write!(self.out, "{}", val)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn eval_exp(&mut self, exp: &Exp) -> Result<isize, Error> {
        match exp {
            Exp::Id(id) => Ok(self.env.lookup(id)),
            Exp::Num(num) => Ok(*num),
            Exp::Op(lhs, op, rhs) => {
                let lhs = self.eval_exp(lhs)?;
                let rhs = self.eval_exp(rhs)?;
                match op {
                    BinOp::Add => Ok(lhs + rhs),
                    BinOp::Sub => Ok(lhs - rhs),
                    BinOp::Mul => Ok(lhs * rhs),
                    BinOp::Div if rhs == 0 => Err(Error::DivideByZero),
                    BinOp::Div => Ok(lhs / rhs),
                }
            }
            Exp::Eseq(stm, exp) => {
                self.exec_stm(stm)?;
                self.eval_exp(exp)
            }
        }
    }
}

/// Runs `prog` against stdout with a fresh environment and returns the
/// final bindings.
pub fn interp(prog: &Stm) -> Result<Env, Error> {
    let stdout = io::stdout();
    let mut interpreter = Interpreter::with_output(stdout.lock());
    interpreter.exec_stm(prog)?;
    Ok(interpreter.into_env())
}
