use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Verifies that every `break` and `continue` in `program` is nested inside a
/// loop body.
///
/// Runs over the whole tree before any statement executes, so a misplaced
/// `break` deep inside a branch that would never be taken is still reported.
///
/// # Errors
/// `LoopControlOutsideLoop` for the first offending statement in source
/// order.
///
/// # Example
/// ```
/// use lack::{error::RuntimeError, interpreter::evaluator::legality::check_loop_control};
///
/// let program = lack::parse("if false { break; }").unwrap();
/// assert_eq!(check_loop_control(&program),
///            Err(RuntimeError::LoopControlOutsideLoop { keyword: "break",
///                                                       line:    1, }));
///
/// let program = lack::parse("while true { if false continue; break; }").unwrap();
/// assert_eq!(check_loop_control(&program), Ok(()));
/// ```
pub fn check_loop_control(program: &[Statement]) -> EvalResult<()> {
    program.iter().try_for_each(|statement| check(statement, 0))
}

fn check(statement: &Statement, loop_depth: usize) -> EvalResult<()> {
    match statement {
        Statement::Break { line } if loop_depth == 0 => {
            Err(RuntimeError::LoopControlOutsideLoop { keyword: "break",
                                                       line:    *line, })
        },
        Statement::Continue { line } if loop_depth == 0 => {
            Err(RuntimeError::LoopControlOutsideLoop { keyword: "continue",
                                                       line:    *line, })
        },
        Statement::Block { statements, .. } => {
            statements.iter().try_for_each(|inner| check(inner, loop_depth))
        },
        Statement::If { then_branch,
                        else_branch,
                        .. } => {
            check(then_branch, loop_depth)?;
            else_branch.as_deref().map_or(Ok(()), |branch| check(branch, loop_depth))
        },
        Statement::While { body, .. }
        | Statement::RepeatUntil { body, .. }
        | Statement::RepeatFor { body, .. } => check(body, loop_depth + 1),
        Statement::Break { .. }
        | Statement::Continue { .. }
        | Statement::Expression { .. }
        | Statement::Write { .. }
        | Statement::Let { .. }
        | Statement::Read { .. }
        | Statement::ReadNum { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_source(source: &str) -> EvalResult<()> {
        check_loop_control(&crate::parse(source).unwrap())
    }

    #[test]
    fn top_level_loop_control_is_rejected() {
        assert_eq!(check_source("break;"),
                   Err(RuntimeError::LoopControlOutsideLoop { keyword: "break",
                                                              line:    1, }));
        assert_eq!(check_source("write 1;\n{ continue; }"),
                   Err(RuntimeError::LoopControlOutsideLoop { keyword: "continue",
                                                              line:    2, }));
    }

    #[test]
    fn loop_control_in_any_loop_kind_is_accepted() {
        assert_eq!(check_source("while false break;"), Ok(()));
        assert_eq!(check_source("repeat { continue; } until true;"), Ok(()));
        assert_eq!(check_source("repeat break; for 1;"), Ok(()));
        assert_eq!(check_source("for ; false; { if true break; else continue; }"), Ok(()));
    }

    #[test]
    fn first_offender_in_source_order_wins() {
        assert_eq!(check_source("while true break;\nif true continue;\nbreak;"),
                   Err(RuntimeError::LoopControlOutsideLoop { keyword: "continue",
                                                              line:    2, }));
    }
}
