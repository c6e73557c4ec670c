//! Directory-driven alignment checks.
//!
//! A suite is a directory whose sub-directories are cases:
//!
//! ```text
//! tests/
//!   case_1/
//!     P.fa        pattern (read)
//!     T.fa        text (reference)
//!     output.txt  "Alignment loci: [2, 4]"
//! ```

use crate::error::{Error, Result};
use crate::fasta;
use crate::index::SuffixArrayIndex;
use crate::search::MatchSet;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use termcolor::{Color, ColorSpec, WriteColor};

pub const PATTERN_FILE: &str = "P.fa";
pub const TEXT_FILE: &str = "T.fa";
pub const EXPECTED_FILE: &str = "output.txt";

/// Last line printed for a suite without failures.
pub const ALL_PASSED: &str = "ALL TESTS PASSED!!!";

/// Positions of `pattern` in `text`, using a fresh index over `text`.
pub fn align(pattern: &str, text: &str) -> MatchSet {
    SuffixArrayIndex::new(text).search(pattern)
}

/// Renders matches in ascending order.
///
/// ```
/// use sufalign::harness::{align, format_loci};
///
/// assert_eq!(format_loci(&align("ana", "banana")), "Alignment loci: [2, 4]");
/// ```
pub fn format_loci(matches: &MatchSet) -> String {
    format!("Alignment loci: {:?}", matches.sorted())
}

/// Outcome of one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseReport {
    pub name: String,
    pub pattern: String,
    pub text: String,
    pub expected: String,
    pub actual: String,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Outcome of every case of a suite, in directory-name order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuiteReport {
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(CaseReport::passed)
    }
}

fn read_expected(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    content
        .lines()
        .next()
        .map(|line| line.trim_end().to_string())
        .ok_or_else(|| Error::EmptyExpected {
            path: path.to_path_buf(),
        })
}

/// Aligns the case stored in `dir` and compares against its expected output.
pub fn run_case<P: AsRef<Path>>(dir: P) -> Result<CaseReport> {
    let dir = dir.as_ref();

    let pattern = fasta::read_sequence(dir.join(PATTERN_FILE))?;
    let text = fasta::read_sequence(dir.join(TEXT_FILE))?;
    let expected = read_expected(&dir.join(EXPECTED_FILE))?;

    let actual = format_loci(&align(&pattern, &text));

    let report = CaseReport {
        name: dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        pattern,
        text,
        expected,
        actual,
    };

    debug!(
        "case {}: {}",
        report.name,
        if report.passed() { "passed" } else { "failed" }
    );

    Ok(report)
}

/// Runs every sub-directory of `dir` as a case.
pub fn run_suite<P: AsRef<Path>>(dir: P) -> Result<SuiteReport> {
    let dir = dir.as_ref();

    let mut case_dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_dir() {
            case_dirs.push(path);
        }
    }
    case_dirs.sort();

    let cases = case_dirs
        .iter()
        .map(run_case)
        .collect::<Result<Vec<_>>>()?;

    let report = SuiteReport { cases };
    debug!(
        "suite {}: {} passed, {} failed",
        dir.display(),
        report.passed(),
        report.failed()
    );

    Ok(report)
}

/// Prints reports to a colour-capable writer.
pub struct Reporter<W> {
    out: W,
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn colored(&mut self, color: Color, line: &str) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        writeln!(self.out, "{}", line)?;
        self.out.reset()
    }

    pub fn case(&mut self, case: &CaseReport) -> io::Result<()> {
        writeln!(self.out, "{}", case.name)?;
        writeln!(self.out, "pattern: {}", case.pattern)?;
        writeln!(self.out, "text: {}", case.text)?;
        writeln!(self.out, "{}", "-".repeat(20))?;
        writeln!(self.out, "expected: {}", case.expected)?;
        writeln!(self.out, "actual:   {}", case.actual)?;

        if case.passed() {
            self.colored(Color::Green, "PASS")?;
        } else {
            self.colored(Color::Red, "FAIL")?;
        }

        writeln!(self.out)
    }

    pub fn suite(&mut self, suite: &SuiteReport) -> io::Result<()> {
        for case in &suite.cases {
            self.case(case)?;
        }

        if suite.all_passed() {
            self.colored(Color::Green, ALL_PASSED)
        } else {
            self.colored(
                Color::Red,
                &format!("{} of {} cases failed", suite.failed(), suite.cases.len()),
            )
        }
    }
}
