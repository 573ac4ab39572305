//! Top-level statement lowering: each [`Item`] writes into `main_buf`.

use ninoc_par::ast::Item;

use crate::context::{emit_line, Buf, CodegenContext};
use crate::error::Result;
use crate::expr::emit_expr;

/// Lowers one top-level item into the `main` function body.
pub fn emit_item(ctx: &mut CodegenContext, item: &Item) -> Result<()> {
    match item {
        Item::Declaration(decl) => {
            // The slot takes the declared name exactly, so later
            // `Identifier` references resolve without a symbol table.
            emit_expr(ctx, &decl.name, &decl.initializer, Buf::Main)?;
            Ok(())
        }
        Item::PrintStatement(stmt) => emit_print(ctx, &stmt.expression),
        Item::ExpressionStatement(expr) => {
            let target = ctx.fresh("e");
            emit_expr(ctx, &target, expr, Buf::Main)?;
            Ok(())
        }
    }
}

fn emit_print(ctx: &mut CodegenContext, expr: &ninoc_par::ast::Expression) -> Result<()> {
    let target = ctx.fresh("print");
    let slot = emit_expr(ctx, &target, expr, Buf::Main)?;
    let value_reg = ctx.fresh("t");
    emit_line!(ctx, Buf::Main, "  %{value_reg} = load i32, i32* %{slot}");

    let fmt_reg = ctx.fresh("fmt");
    emit_line!(
        ctx,
        Buf::Main,
        "  %{fmt_reg} = getelementptr inbounds [4 x i8], [4 x i8]* @.int_str, i32 0, i32 0"
    );
    emit_line!(ctx, Buf::Main, "  call i32 (i8*, ...) @printf(i8* %{fmt_reg}, i32 %{value_reg})");
    Ok(())
}
