use anyhow::Result;
use clap::Parser;
use straightline::ast::{BinOp, Exp, ExpList, Stm};
use straightline::eval;

/// Straight-line program interpreter
#[derive(Parser, Debug)]
struct Args {}

fn main() -> Result<()> {
    Args::parse();
    // a := 5 + 3; b := (print(a, a - 1), 10 * a); print(b)
    let prog = Stm::Compound(
        Stm::Assign {
            id: "a".into(),
            exp: Exp::Op(Exp::Num(5).into(), BinOp::Add, Exp::Num(3).into()),
        }
        .into(),
        Stm::Compound(
            Stm::Assign {
                id: "b".into(),
                exp: Exp::Eseq(
                    Stm::Print(ExpList::Pair(
                        Exp::Id("a".into()).into(),
                        ExpList::Last(
                            Exp::Op(Exp::Id("a".into()).into(), BinOp::Sub, Exp::Num(1).into())
                                .into(),
                        )
                        .into(),
                    ))
                    .into(),
                    Exp::Op(Exp::Num(10).into(), BinOp::Mul, Exp::Id("a".into()).into()).into(),
                ),
            }
            .into(),
            Stm::Print(ExpList::Last(Exp::Id("b".into()).into())).into(),
        )
        .into(),
    );
    println!("{}", prog.max_print_args());
    eval::interp(&prog)?;
    Ok(())
}
