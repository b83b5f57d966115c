use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum IdxdocError {
	#[error(transparent)]
	#[diagnostic(code(idxdoc::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read definitions directory `{path}`: {reason}")]
	#[diagnostic(
		code(idxdoc::definitions_dir),
		help("set `definitions` in idxdoc.toml or pass `--definitions <DIR>`")
	)]
	DefinitionsDir { path: String, reason: String },

	#[error("failed to read definition file `{path}`: {reason}")]
	#[diagnostic(code(idxdoc::read_definition))]
	ReadDefinition { path: String, reason: String },

	#[error("failed to write output file `{path}`: {reason}")]
	#[diagnostic(code(idxdoc::write_output))]
	WriteOutput { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(idxdoc::config_parse),
		help("check that idxdoc.toml is valid TOML with `definitions`, `extension` and an optional [output] table")
	)]
	ConfigParse(String),
}

pub type IdxdocResult<T> = Result<T, IdxdocError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
