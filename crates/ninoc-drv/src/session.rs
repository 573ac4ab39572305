//! Drives the three core stages in order and shells out to `clang`.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{CompileError, DriverError, Result};

const BUILD_IR_PATH: &str = "build/build.ll";

pub struct Session {
    pub config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session { config }
    }

    /// Reads the source file, lexes, parses, generates LLVM IR, writes it
    /// to `build/build.ll`, then invokes `clang` to assemble and link the
    /// destination executable. Every stage is fatal-on-first-error; no
    /// partial IR module is written on failure.
    pub fn compile(&self) -> Result<()> {
        let source = std::fs::read_to_string(&self.config.source_path)
            .map_err(|e| DriverError::Io(self.config.source_path.clone(), e))?;
        info!(bytes = source.len(), path = %self.config.source_path.display(), "read source");

        let items = ninoc_par::parse_source(&source)?;
        info!(items = items.len(), "parsed");

        let module = ninoc_gen::generate(&items).map_err(CompileError::Codegen)?;
        info!(bytes = module.len(), "generated LLVM IR");

        self.write_ir(&module)?;
        self.invoke_clang()?;
        Ok(())
    }

    fn write_ir(&self, module: &str) -> Result<()> {
        let path = Path::new(BUILD_IR_PATH);
        std::fs::write(path, module).map_err(|e| DriverError::Io(path.to_path_buf(), e))?;
        debug!(path = %path.display(), "wrote IR module");
        Ok(())
    }

    fn invoke_clang(&self) -> Result<()> {
        let destination = &self.config.destination_path;
        debug!(
            destination = %destination.display(),
            ir = BUILD_IR_PATH,
            "invoking clang -o {} {} -Wno-override-module",
            destination.display(),
            BUILD_IR_PATH
        );

        let status = Command::new("clang")
            .arg("-o")
            .arg(destination)
            .arg(BUILD_IR_PATH)
            .arg("-Wno-override-module")
            .status()
            .map_err(|e| DriverError::Io(destination.clone(), e))?;

        if status.success() {
            info!(destination = %destination.display(), "linked executable");
            Ok(())
        } else {
            Err(DriverError::ToolchainFailed(status.code().unwrap_or(-1)).into())
        }
    }
}
