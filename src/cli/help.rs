// cli/help.rs — Help and version text for the `kefka` binary.
//
// Functions:
//   general_help   → overview listing the help topics
//   eol_help       → end-of-line conversion usage
//   concat_help    → concatenation usage
//   help_text      → text for a parsed HelpTopic
//   print_help     → writes help_text to stdout
//   version_banner → one-line version string

use crate::cli::constants::{KEFKA_VERSION_STRING, PROGRAM_NAME};

/// What `kefka -h [topic]` asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpTopic {
    General,
    Eol,
    Concat,
    /// A topic name that matches neither mode.
    Unknown(String),
}

impl HelpTopic {
    /// Maps the word after `-h` to a topic. Case-insensitive.
    pub fn from_word(word: Option<&str>) -> Self {
        match word.map(str::to_ascii_lowercase).as_deref() {
            None => HelpTopic::General,
            Some("eol") => HelpTopic::Eol,
            Some("concat") => HelpTopic::Concat,
            Some(other) => HelpTopic::Unknown(other.to_owned()),
        }
    }
}

pub fn general_help() -> String {
    format!(
        "
{name} is a cross-platform file transform tool,
which can currently perform two different tasks.
For detailed usage info on a task,
run the following:

{name} -h eol         End-of-line conversion.
{name} -h concat      Concat files.

{name} -v             Version info.

Global options:
  --quiet             Only report errors.
  --verbose           Report every file and internal detail.
  --buffer=SIZE       Working buffer size, e.g. 64K or 1M.
  --temp-dir=DIR      Where in-place conversion stages its files.
",
        name = PROGRAM_NAME
    )
}

pub fn eol_help() -> String {
    format!(
        "
End-of-line conversion
* Supports large files.
* Removes a leading UTF-8 byte order mark unless --keep-bom is given.

Usage:
  {name} --eol=EOL_TYPE [input-files] (-o output-dir | -of output-file | -i)
        [--keep-bom]

Options:
  --eol=EOL_TYPE
        Line ending every CR, LF and CRLF is rewritten to.
        EOL_TYPE values:
            lf    line-feed
            crlf  carriage-return/line-feed
            cr    carriage-return
  [input-files]
        Space-delimited list of input files.
  [-o output-dir]
        Existing directory; each output keeps its input's file name.
  [-of output-file]
        Output file. Only valid with a single input file.
  [-i | --in-place]
        Rewrite each input file in place.
  [--keep-bom]
        Leave a leading UTF-8 byte order mark in the output.

Example:
  {name} --eol=lf path/to/file.txt -o output/path/
",
        name = PROGRAM_NAME
    )
}

pub fn concat_help() -> String {
    format!(
        "
Concat files
* Supports large files.
* Can use line-ending delimiters between files.

Usage:
  {name} --concat [input-files] [-of output-file]
        [-d=DELIMITER_TYPE] [-dn=DELIMITER_NUMBER]
        [-e=EOF_EOL_TYPE]

Options:
  --concat
        Indicates file concatenation.
  [input-files]
        Space-delimited list of at least two input files.
  [-of output-file]
        Output file.
  [-d=DELIMITER_TYPE]
        Optional delimiter, written after every input file.
        If omitted, will not use a delimiter.
        DELIMITER_TYPE values:
            lf    line-feed
            crlf  carriage-return/line-feed
            cr    carriage-return
  [-dn=DELIMITER_NUMBER]
        Optional delimiter number.
        The number of times the delimiter will repeat.
        If omitted, will use 1.
  [-e=EOF_EOL_TYPE]
        Optional end-line at end of file.
        If omitted, no end-line at end of file.
        EOF_EOL_TYPE values:
            lf    line-feed
            crlf  carriage-return/line-feed
            cr    carriage-return

Example:
  {name} --concat path/to/file1.js path/to/file2.js
        -of output/file.js -d=lf -dn=2 -e=lf
",
        name = PROGRAM_NAME
    )
}

pub fn help_text(topic: &HelpTopic) -> String {
    match topic {
        HelpTopic::General => general_help(),
        HelpTopic::Eol => eol_help(),
        HelpTopic::Concat => concat_help(),
        HelpTopic::Unknown(_) => format!("Unrecognized help topic.\n{}", general_help()),
    }
}

/// Print help for `topic` to stdout.
pub fn print_help(topic: &HelpTopic) {
    crate::displayout!("{}\n", help_text(topic));
}

pub fn version_banner() -> String {
    let bits = std::mem::size_of::<usize>() * 8;
    format!("{} v{} {}-bit", PROGRAM_NAME, KEFKA_VERSION_STRING, bits)
}
