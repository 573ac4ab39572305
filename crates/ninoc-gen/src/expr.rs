//! Expression lowering: turns an [`Expression`] into IR instructions and
//! returns the name of the `i32*` alloca slot holding its value.

use ninoc_par::ast::Expression;

use crate::context::{emit_line, Buf, CodegenContext};
use crate::error::{CodegenError, Result};

/// Lowers `expr` into `buf`, using `target` as the base name for any slot
/// this call allocates directly (recursive sub-lowerings mint their own
/// fresh names and are not bound by `target`). Returns the name of the
/// `i32*` slot (without the leading `%`) that holds the result.
pub fn emit_expr(ctx: &mut CodegenContext, target: &str, expr: &Expression, buf: Buf) -> Result<String> {
    match expr {
        Expression::IntegerLiteral { text, .. } => {
            emit_line!(ctx, buf, "  %{target} = alloca i32");
            emit_line!(ctx, buf, "  store i32 {text}, i32* %{target}");
            Ok(target.to_string())
        }
        Expression::Identifier { text, .. } => Ok(text.clone()),
        Expression::BinaryOp { op, left, right, .. } => emit_binary_op(ctx, target, op, left, right, buf),
        Expression::FunctionLiteral { parameters, body, .. } => {
            emit_function_literal(ctx, target, parameters, body)
        }
        Expression::FunctionCall { callee_name, arguments, .. } => {
            emit_function_call(ctx, target, callee_name, arguments, buf)
        }
        Expression::PatternMatch { scrutinee, arms, .. } => {
            emit_pattern_match(ctx, target, scrutinee, arms, buf)
        }
        Expression::FloatLiteral { .. } => Err(CodegenError::UnknownExpressionKind(expr.kind_tag())),
        Expression::StringLiteral { .. } => Err(CodegenError::UnknownExpressionKind(expr.kind_tag())),
    }
}

fn opcode_for(op: &str) -> Result<&'static str> {
    match op {
        "+" => Ok("add"),
        "-" => Ok("sub"),
        "*" => Ok("mul"),
        "/" => Ok("sdiv"),
        other => Err(CodegenError::UnknownOperator(other.to_string())),
    }
}

fn emit_binary_op(
    ctx: &mut CodegenContext,
    target: &str,
    op: &str,
    left: &Expression,
    right: &Expression,
    buf: Buf,
) -> Result<String> {
    let opcode = opcode_for(op)?;

    let left_slot_name = ctx.fresh("l");
    let left_slot = emit_expr(ctx, &left_slot_name, left, buf)?;
    let left_reg = ctx.fresh("t");
    emit_line!(ctx, buf, "  %{left_reg} = load i32, i32* %{left_slot}");

    let right_slot_name = ctx.fresh("r");
    let right_slot = emit_expr(ctx, &right_slot_name, right, buf)?;
    let right_reg = ctx.fresh("t");
    emit_line!(ctx, buf, "  %{right_reg} = load i32, i32* %{right_slot}");

    let result_reg = ctx.fresh("t");
    emit_line!(ctx, buf, "  %{result_reg} = {opcode} i32 %{left_reg}, %{right_reg}");

    emit_line!(ctx, buf, "  %{target} = alloca i32");
    emit_line!(ctx, buf, "  store i32 %{result_reg}, i32* %{target}");
    Ok(target.to_string())
}

fn emit_function_literal(
    ctx: &mut CodegenContext,
    target: &str,
    parameters: &[ninoc_par::ast::Parameter],
    body: &Expression,
) -> Result<String> {
    let params_decl = parameters
        .iter()
        .map(|p| format!("i32 %{}.arg", p.name))
        .collect::<Vec<_>>()
        .join(", ");

    emit_line!(ctx, Buf::Functions, "define i32 @{target}({params_decl}) {{");
    emit_line!(ctx, Buf::Functions, "entry:");
    for param in parameters {
        emit_line!(ctx, Buf::Functions, "  %{0} = alloca i32", param.name);
        emit_line!(ctx, Buf::Functions, "  store i32 %{0}.arg, i32* %{0}", param.name);
    }

    let body_target = ctx.fresh("body");
    let body_slot = emit_expr(ctx, &body_target, body, Buf::Functions)?;
    let result_reg = ctx.fresh("t");
    emit_line!(ctx, Buf::Functions, "  %{result_reg} = load i32, i32* %{body_slot}");
    emit_line!(ctx, Buf::Functions, "  ret i32 %{result_reg}");
    emit_line!(ctx, Buf::Functions, "}}");

    Ok(target.to_string())
}

fn emit_function_call(
    ctx: &mut CodegenContext,
    target: &str,
    callee_name: &str,
    arguments: &[Expression],
    buf: Buf,
) -> Result<String> {
    let mut arg_regs = Vec::with_capacity(arguments.len());
    for argument in arguments {
        let arg_slot_name = ctx.fresh("a");
        let arg_slot = emit_expr(ctx, &arg_slot_name, argument, buf)?;
        let arg_reg = ctx.fresh("t");
        emit_line!(ctx, buf, "  %{arg_reg} = load i32, i32* %{arg_slot}");
        arg_regs.push(arg_reg);
    }

    let call_reg = ctx.fresh("t");
    let args_text = arg_regs.iter().map(|r| format!("i32 %{r}")).collect::<Vec<_>>().join(", ");
    emit_line!(ctx, buf, "  %{call_reg} = call i32 @{callee_name}({args_text})");

    emit_line!(ctx, buf, "  %{target} = alloca i32");
    emit_line!(ctx, buf, "  store i32 %{call_reg}, i32* %{target}");
    Ok(target.to_string())
}

fn emit_pattern_match(
    ctx: &mut CodegenContext,
    target: &str,
    scrutinee: &Expression,
    arms: &[ninoc_par::ast::MatchArm],
    buf: Buf,
) -> Result<String> {
    let match_fn_name = format!("{target}_match");
    emit_pattern_match_helper(ctx, &match_fn_name, arms)?;

    let scrutinee_slot_name = ctx.fresh("s");
    let scrutinee_slot = emit_expr(ctx, &scrutinee_slot_name, scrutinee, buf)?;
    let scrutinee_reg = ctx.fresh("t");
    emit_line!(ctx, buf, "  %{scrutinee_reg} = load i32, i32* %{scrutinee_slot}");

    let call_reg = ctx.fresh("t");
    emit_line!(ctx, buf, "  %{call_reg} = call i32 @{match_fn_name}(i32 %{scrutinee_reg})");

    emit_line!(ctx, buf, "  %{target} = alloca i32");
    emit_line!(ctx, buf, "  store i32 %{call_reg}, i32* %{target}");
    Ok(target.to_string())
}

fn emit_pattern_match_helper(
    ctx: &mut CodegenContext,
    match_fn_name: &str,
    arms: &[ninoc_par::ast::MatchArm],
) -> Result<()> {
    emit_line!(ctx, Buf::Functions, "define i32 @{match_fn_name}(i32 %value) {{");
    emit_line!(ctx, Buf::Functions, "  %result = alloca i32");
    emit_line!(ctx, Buf::Functions, "  br label %pattern_0");

    for (i, arm) in arms.iter().enumerate() {
        let next_label = if i + 1 < arms.len() { format!("pattern_{}", i + 1) } else { "end".to_string() };

        emit_line!(ctx, Buf::Functions, "pattern_{i}:");
        let pattern_target = ctx.fresh("p");
        let pattern_slot = emit_expr(ctx, &pattern_target, &arm.pattern, Buf::Functions)?;
        let pattern_reg = ctx.fresh("t");
        emit_line!(ctx, Buf::Functions, "  %{pattern_reg} = load i32, i32* %{pattern_slot}");
        let cmp_reg = ctx.fresh("c");
        emit_line!(ctx, Buf::Functions, "  %{cmp_reg} = icmp eq i32 %value, %{pattern_reg}");
        emit_line!(ctx, Buf::Functions, "  br i1 %{cmp_reg}, label %set_{i}, label %{next_label}");

        emit_line!(ctx, Buf::Functions, "set_{i}:");
        let value_target = ctx.fresh("v");
        let value_slot = emit_expr(ctx, &value_target, &arm.value, Buf::Functions)?;
        let value_reg = ctx.fresh("t");
        emit_line!(ctx, Buf::Functions, "  %{value_reg} = load i32, i32* %{value_slot}");
        emit_line!(ctx, Buf::Functions, "  store i32 %{value_reg}, i32* %result");
        emit_line!(ctx, Buf::Functions, "  br label %end");
    }

    emit_line!(ctx, Buf::Functions, "end:");
    emit_line!(ctx, Buf::Functions, "  %result_value = load i32, i32* %result");
    emit_line!(ctx, Buf::Functions, "  ret i32 %result_value");
    emit_line!(ctx, Buf::Functions, "}}");
    Ok(())
}
