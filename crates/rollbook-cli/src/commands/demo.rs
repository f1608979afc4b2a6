//! Registry walkthrough command
//!
//! Usage: rollbook demo [--json]
//!
//! Builds a registry in memory, walks it through the full lifecycle
//! (add people and courses, enroll, grade, cascade removal), and prints
//! the observable state at each step. This layer owns lifecycle logging
//! (`log_op_start!` / `log_op_end!` / `log_op_error!`); the registry
//! operations emit only debug internals.

use std::time::Instant;

use clap::Args;
use serde::Serialize;

use rollbook_core::ops::{course_ops, enrollment_ops, instructor_ops, student_ops, Registry};
use rollbook_core::queries::{courses_by_student, students_by_course};
use rollbook_core::render::{describe_course, describe_enrollment, describe_person};
use rollbook_core::{log_op_end, log_op_error, log_op_start};
use rollbook_core::{Course, Enrollment, Person};

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Print the final registry state as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// Snapshot of the registry's collections for JSON output
#[derive(Serialize)]
struct RegistrySnapshot<'a> {
    students: Vec<&'a Person>,
    instructors: Vec<&'a Person>,
    courses: Vec<&'a Course>,
    enrollments: &'a [Enrollment],
}

/// Execute the demo walkthrough
pub fn execute(args: DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    log_op_start!("demo");
    let start = Instant::now();

    let mut registry = Registry::new();

    // People
    let alice = student_ops::add_student(
        &mut registry,
        "Alice".to_string(),
        "1001".to_string(),
        "Computer Science".to_string(),
    );
    let bob = student_ops::add_student(
        &mut registry,
        "Bob".to_string(),
        "1002".to_string(),
        "Mathematics".to_string(),
    );
    instructor_ops::add_instructor(
        &mut registry,
        "Dr. Smith".to_string(),
        "2001".to_string(),
        "Computer Science".to_string(),
    );

    // Courses
    let cs101 = course_ops::add_course(
        &mut registry,
        "Introduction to Programming".to_string(),
        "CS101".to_string(),
    );
    let math101 = course_ops::add_course(
        &mut registry,
        "Calculus I".to_string(),
        "MATH101".to_string(),
    );

    // Enrollment and grading
    enrollment_ops::enroll_student(&mut registry, &alice, &cs101);
    enrollment_ops::enroll_student(&mut registry, &bob, &math101);
    enrollment_ops::assign_grade(&mut registry, &alice, &cs101, 90);

    println!("-- People --");
    for person in registry.list_students() {
        println!("{}", describe_person(person));
    }
    for person in registry.list_instructors() {
        println!("{}", describe_person(person));
    }

    println!("\n-- Courses --");
    for course in [&cs101, &math101] {
        println!("{}", describe_course(&registry, course)?);
    }

    println!("\n-- Enrollments --");
    for enrollment in registry.enrollments() {
        println!("{}", describe_enrollment(&registry, enrollment));
    }

    println!(
        "\nCourses of Alice: {} enrolled",
        courses_by_student(&registry, &alice).len()
    );

    // Cascade removal: Alice's enrollment record goes away, the CS101
    // roster keeps her handle
    student_ops::remove_student(&mut registry, &alice);

    println!("\n-- After removing Alice --");
    println!("{}", describe_course(&registry, &cs101)?);
    println!(
        "CS101 roster entries: {}",
        students_by_course(&registry, &cs101).len()
    );
    println!(
        "Courses of Alice: {} enrolled",
        courses_by_student(&registry, &alice).len()
    );

    // The strict lookup surface now reports the pair as gone
    let lookup_start = Instant::now();
    match registry.require_enrollment(&alice, &cs101) {
        Ok(enrollment) => {
            println!("{}", describe_enrollment(&registry, enrollment));
        }
        Err(err) => {
            log_op_error!(
                "enrollment_lookup",
                err,
                duration_ms = lookup_start.elapsed().as_millis() as u64
            );
            println!("No enrollment recorded for Alice in CS101");
        }
    }

    if args.json {
        let snapshot = RegistrySnapshot {
            students: registry.list_students(),
            instructors: registry.list_instructors(),
            courses: registry.list_courses(),
            enrollments: registry.enrollments(),
        };
        println!("\n{}", serde_json::to_string_pretty(&snapshot)?);
    }

    log_op_end!("demo", duration_ms = start.elapsed().as_millis() as u64);
    Ok(())
}
