//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aula", version, about = "Academic records kept in plain text files")]
pub struct Cli {
  /// Path to a TOML config file. Missing is fine.
  #[arg(short, long, value_name = "FILE", default_value = "aula.toml")]
  pub config: PathBuf,

  /// Directory holding the data files. Overrides the config file and
  /// `AULA_DATA_DIR`.
  #[arg(long, value_name = "DIR")]
  pub data_dir: Option<PathBuf>,

  /// Print results as JSON instead of text.
  #[arg(long, global = true)]
  pub json: bool,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Register, edit and look up students.
  #[command(subcommand)]
  Student(StudentCommand),
  /// Manage the course catalogue.
  #[command(subcommand)]
  Course(CourseCommand),
  /// Enroll students in courses.
  #[command(subcommand)]
  Enroll(EnrollCommand),
  /// Record and report grades.
  #[command(subcommand)]
  Grade(GradeCommand),
  /// Take and report attendance.
  #[command(subcommand)]
  Attendance(AttendanceCommand),
  /// Summary counts and the latest grades.
  Dashboard,
  /// Majors a student can be registered under.
  Majors,
}

// ─── Students ────────────────────────────────────────────────────────────────

#[derive(Args, Debug, Clone)]
pub struct StudentFields {
  #[arg(long)]
  pub first_name: String,
  #[arg(long)]
  pub last_name:  String,
  #[arg(long, default_value = "")]
  pub major:      String,
  /// `YYYY-MM-DD`.
  #[arg(long, default_value = "")]
  pub birth_date: String,
  #[arg(long)]
  pub email:      String,
  /// Register the student as inactive.
  #[arg(long)]
  pub inactive:   bool,
}

#[derive(Subcommand, Debug)]
pub enum StudentCommand {
  Add(StudentFields),
  Update {
    id:     String,
    #[command(flatten)]
    fields: StudentFields,
  },
  Delete {
    id: String,
  },
  /// Profile with per-course averages and attendance.
  Show {
    id: String,
  },
  List {
    /// Only active students.
    #[arg(long)]
    active: bool,
  },
  Search {
    #[arg(default_value = "")]
    term: String,
  },
  /// Active students enrolled in a course.
  InCourse {
    course_code: String,
  },
  /// The id the next registration will get.
  NextId,
}

// ─── Courses ─────────────────────────────────────────────────────────────────

#[derive(Args, Debug, Clone)]
pub struct CourseFields {
  pub code:       String,
  #[arg(long)]
  pub name:       String,
  #[arg(long, default_value = "")]
  pub instructor: String,
  #[arg(long, default_value_t = 0)]
  pub credits:    u32,
}

#[derive(Subcommand, Debug)]
pub enum CourseCommand {
  Add(CourseFields),
  Update(CourseFields),
  Delete {
    code: String,
  },
  Show {
    code: String,
  },
  List,
  Search {
    #[arg(default_value = "")]
    term: String,
  },
}

// ─── Enrollments ─────────────────────────────────────────────────────────────

#[derive(Subcommand, Debug)]
pub enum EnrollCommand {
  Add {
    student_id:  String,
    course_code: String,
    /// Defaults to today.
    #[arg(long)]
    date:        Option<String>,
    #[arg(long)]
    period:      Option<String>,
    #[arg(long)]
    status:      Option<String>,
  },
  /// Exit status 0 when enrolled, 1 otherwise.
  Check {
    student_id:  String,
    course_code: String,
  },
  List,
  Search {
    #[arg(default_value = "")]
    term: String,
  },
  Delete {
    student_id:  String,
    course_code: String,
  },
}

// ─── Grades ──────────────────────────────────────────────────────────────────

#[derive(Subcommand, Debug)]
pub enum GradeCommand {
  /// Record the three scores (0 to 20), replacing earlier ones.
  Set {
    student_id:  String,
    course_code: String,
    n1:          f64,
    n2:          f64,
    n3:          f64,
  },
  List {
    #[arg(long, conflicts_with = "student")]
    course:  Option<String>,
    #[arg(long)]
    student: Option<String>,
  },
  Search {
    #[arg(default_value = "")]
    term: String,
  },
  Delete {
    student_id:  String,
    course_code: String,
  },
}

// ─── Attendance ──────────────────────────────────────────────────────────────

#[derive(Subcommand, Debug)]
pub enum AttendanceCommand {
  /// Presente, Tardanza or Ausente.
  Mark {
    student_id:  String,
    course_code: String,
    date:        String,
    status:      String,
  },
  /// The status recorded for one session, if any.
  Status {
    student_id:  String,
    course_code: String,
    date:        String,
  },
  List {
    #[arg(long, requires = "date")]
    course: Option<String>,
    #[arg(long, requires = "course")]
    date:   Option<String>,
  },
  Search {
    #[arg(default_value = "")]
    term: String,
  },
  Delete {
    student_id:  String,
    course_code: String,
    date:        String,
  },
}
