//! Lowers a parsed program into one textual LLVM IR module.
//!
//! The output format is frozen: typed pointers (`i32*`, `i8*`), a fixed
//! header, and a single `@main` entry point. See [`generate`].

mod context;
mod error;
mod expr;
mod item;

pub use error::{CodegenError, Result};

use ninoc_par::ast::Item;

const HEADER: &str = "@.int_str = private unnamed_addr constant [4 x i8] c\"%d\\0A\\00\"\ndeclare i32 @printf(i8*, ...)\n";

/// Lowers `items` into a complete LLVM IR module, ready to be written to
/// disk and passed to `clang`.
pub fn generate(items: &[Item]) -> Result<String> {
    let mut ctx = context::CodegenContext::new();

    for item in items {
        item::emit_item(&mut ctx, item)?;
    }

    let (functions_buf, main_buf) = ctx.into_functions_and_main();

    let mut module = String::new();
    module.push_str(HEADER);
    module.push_str(&functions_buf);
    module.push_str("define i32 @main() {\n");
    module.push_str("entry:\n");
    module.push_str(&main_buf);
    module.push_str("  ret i32 0\n");
    module.push_str("}\n");
    Ok(module)
}
