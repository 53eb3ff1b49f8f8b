use crate::ast::{Exp, Stm};
use std::cmp::max;

impl Stm {
    /// Largest number of arguments passed to any print statement in the
    /// tree, including prints buried in `Eseq` effects.
    pub fn max_print_args(&self) -> usize {
        match self {
            Stm::Compound(s1, s2) => max(s1.max_print_args(), s2.max_print_args()),
            Stm::Assign { exp, .. } => exp.max_print_args(),
            Stm::Print(args) => args
                .iter()
                .map(Exp::max_print_args)
                .fold(args.len(), max),
        }
    }
}

impl Exp {
    pub fn max_print_args(&self) -> usize {
        match self {
            Exp::Op(lhs, _, rhs) => max(lhs.max_print_args(), rhs.max_print_args()),
            Exp::Eseq(stm, exp) => max(stm.max_print_args(), exp.max_print_args()),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{BinOp, Exp, ExpList, Stm};

    #[test]
    fn no_prints_is_zero() {
        let stm = Stm::Assign {
            id: "a".into(),
            exp: Exp::Op(Exp::Num(1).into(), BinOp::Add, Exp::Num(2).into()),
        };
        assert_eq!(stm.max_print_args(), 0);
    }

    #[test]
    fn single_argument_print_is_one() {
        let stm = Stm::Print(ExpList::Last(Exp::Num(1).into()));
        assert_eq!(stm.max_print_args(), 1);
    }

    #[test]
    fn widest_print_wins_across_compounds() {
        let stm = Stm::Compound(
            Stm::Print(ExpList::Last(Exp::Num(1).into())).into(),
            Stm::Print(ExpList::Pair(
                Exp::Num(1).into(),
                ExpList::Pair(Exp::Num(2).into(), ExpList::Last(Exp::Num(3).into()).into()).into(),
            ))
            .into(),
        );
        assert_eq!(stm.max_print_args(), 3);
    }

    #[test]
    fn counts_print_inside_print_argument() {
        // print((print(1, 2, 3), 0)) -- the inner print is wider.
        let inner = Stm::Print(ExpList::Pair(
            Exp::Num(1).into(),
            ExpList::Pair(Exp::Num(2).into(), ExpList::Last(Exp::Num(3).into()).into()).into(),
        ));
        let stm = Stm::Print(ExpList::Last(
            Exp::Eseq(inner.into(), Exp::Num(0).into()).into(),
        ));
        assert_eq!(stm.max_print_args(), 3);
    }

    #[test]
    fn counts_print_inside_assignment_operands() {
        let print = Stm::Print(ExpList::Pair(
            Exp::Num(1).into(),
            ExpList::Last(Exp::Num(2).into()).into(),
        ));
        let stm = Stm::Assign {
            id: "a".into(),
            exp: Exp::Op(
                Exp::Num(1).into(),
                BinOp::Mul,
                Exp::Eseq(print.into(), Exp::Num(2).into()).into(),
            ),
        };
        assert_eq!(stm.max_print_args(), 2);
    }

    #[test]
    fn analysis_is_idempotent() {
        let stm = Stm::Print(ExpList::Pair(
            Exp::Num(1).into(),
            ExpList::Last(Exp::Num(2).into()).into(),
        ));
        assert_eq!(stm.max_print_args(), stm.max_print_args());
    }
}
