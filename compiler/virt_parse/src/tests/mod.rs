#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

//! Parser tests. Trees are rendered as s-expressions so assertions stay
//! readable; spans are checked separately.


use virt_ir::{Expr, ExprKind, FnDeclaration, Stmt, StmtKind};

use crate::produce_ast;

/// Parse `source` and render every top-level statement.
fn parse(source: &str) -> Vec<String> {
    produce_ast(source)
        .unwrap()
        .body
        .iter()
        .map(render_stmt)
        .collect()
}

/// Parse `source`, which must hold exactly one statement, and render it.
fn parse_one(source: &str) -> String {
    let mut stmts = parse(source);
    assert_eq!(stmts.len(), 1, "expected one statement in {source:?}");
    stmts.remove(0)
}

fn render_stmt(stmt: &Stmt) -> String {
    match &stmt.kind {
        StmtKind::VarDeclaration(decl) => {
            let keyword = if decl.constant { "const" } else { "let" };
            let value = decl.value.as_ref().map_or("nil".to_string(), render);
            format!("({keyword} {} {value})", decl.name)
        }
        StmtKind::FnDeclaration(decl) => render_fn(decl),
        StmtKind::IfStatement(stmt) => {
            format!("(if {} {})", render(&stmt.condition), render_body(&stmt.body))
        }
        StmtKind::Expr(expr) => render(expr),
    }
}

fn render_body(body: &[Stmt]) -> String {
    let stmts: Vec<String> = body.iter().map(render_stmt).collect();
    format!("[{}]", stmts.join(" "))
}

fn render_fn(decl: &FnDeclaration) -> String {
    let name = if decl.anonymous {
        String::new()
    } else {
        format!("{} ", decl.name)
    };
    format!(
        "(fn {name}[{}] {})",
        decl.params.join(" "),
        render_body(&decl.body)
    )
}

fn render(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::FnDeclaration(decl) => render_fn(decl),
        ExprKind::WhileLoop { condition, body } => {
            format!("(while {} {})", render(condition), render_body(body))
        }
        ExprKind::ReturnStmt(None) => "(return)".to_string(),
        ExprKind::ReturnStmt(Some(value)) => format!("(return {})", render(value)),
        ExprKind::TryCatchStmt(stmt) => format!(
            "(try {} catch {} {})",
            render_body(&stmt.try_body),
            stmt.catch_var,
            render_body(&stmt.catch_body)
        ),
        ExprKind::VarAssignment { assignee, value } => {
            format!("(= {} {})", render(assignee), render(value))
        }
        ExprKind::Binary { lhs, rhs, op } => format!("({op} {} {})", render(lhs), render(rhs)),
        ExprKind::Compare { lhs, rhs, op } => format!("({op} {} {})", render(lhs), render(rhs)),
        ExprKind::Call { callee, args } => {
            let mut out = format!("(call {}", render(callee));
            for arg in args {
                out.push(' ');
                out.push_str(&render(arg));
            }
            out.push(')');
            out
        }
        ExprKind::Member {
            object,
            property,
            computed,
        } => {
            let op = if *computed { "[]" } else { "." };
            format!("({op} {} {})", render(object), render(property))
        }
        ExprKind::ObjectLiteral(properties) => {
            let entries: Vec<String> = properties
                .iter()
                .map(|p| match &p.value {
                    Some(value) => format!("{}: {}", p.key, render(value)),
                    None => p.key.clone(),
                })
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        ExprKind::Identifier(name) => name.clone(),
        ExprKind::NumericLiteral(n) => n.to_string(),
        ExprKind::StringLiteral(s) => format!("'{s}'"),
    }
}
