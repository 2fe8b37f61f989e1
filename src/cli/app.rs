//! Interactive menu loop.
//!
//! `ProjectsApp` owns the only mutable UI state, the currently selected
//! project. Every menu iteration runs to completion before the next line of
//! input is read; any failure inside an iteration is reported and the menu is
//! shown again.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::cli::error::{CliError, CliResult};
use crate::cli::input::Console;
use crate::cli::utils::{format_optional, format_project_detail};
use crate::db::{Database, Project};
use crate::service::ProjectService;

const OPERATIONS: [&str; 5] = [
    "1) Add a project",
    "2) List projects",
    "3) Select a project",
    "4) Update project details",
    "5) Delete a project",
];

/// Selection value for a blank menu line.
const EXIT_SELECTION: i32 = -1;

enum Flow {
    Continue,
    Exit,
}

pub struct ProjectsApp<D: Database, R, W> {
    service: ProjectService<D>,
    console: Console<R, W>,
    current_project: Option<Project>,
}

impl<D: Database, R: BufRead, W: Write> ProjectsApp<D, R, W> {
    pub fn new(service: ProjectService<D>, input: R, output: W) -> Self {
        Self {
            service,
            console: Console::new(input, output),
            current_project: None,
        }
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current_project.as_ref()
    }

    pub fn service(&self) -> &ProjectService<D> {
        &self.service
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the menu until the user exits.
    ///
    /// Console I/O failures end the loop; everything else is reported and
    /// the menu comes back.
    pub async fn run(&mut self) -> CliResult<()> {
        loop {
            match self.process_selection().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(CliError::Io(e)) => return Err(CliError::Io(e)),
                Err(e) => {
                    debug!(error = %e, "Menu operation failed");
                    writeln!(self.console.out(), "\nERROR: {} TRY AGAIN!", e)?;
                }
            }
        }
    }

    async fn process_selection(&mut self) -> CliResult<Flow> {
        let selection = self.user_selection()?;
        debug!(selection, "Menu selection");

        match selection {
            EXIT_SELECTION => {
                writeln!(self.console.out(), "\nExiting the menu. Good Bye!")?;
                return Ok(Flow::Exit);
            }
            1 => self.create_project().await?,
            2 => self.list_projects().await?,
            3 => self.select_project().await?,
            4 => self.update_project_details().await?,
            5 => self.delete_project().await?,
            other => writeln!(self.console.out(), "\n{} is not a valid selection.", other)?,
        }
        Ok(Flow::Continue)
    }

    fn user_selection(&mut self) -> CliResult<i32> {
        self.print_operations()?;
        Ok(self
            .console
            .number_input("Enter a menu selection")?
            .unwrap_or(EXIT_SELECTION))
    }

    fn print_operations(&mut self) -> CliResult<()> {
        let out = self.console.out();
        writeln!(
            out,
            "\nThese are the available selections. Press the Enter key to quit:"
        )?;
        for line in OPERATIONS {
            writeln!(out, "  {}", line)?;
        }

        match &self.current_project {
            None => writeln!(out, "\nYou are not working with a project.")?,
            Some(project) => writeln!(
                out,
                "\nYou are working with project:\n{}",
                format_project_detail(project)
            )?,
        }
        Ok(())
    }

    async fn create_project(&mut self) -> CliResult<()> {
        let name = self.console.string_input("Enter the project name")?;
        let estimated_hours = self.console.decimal_input("Enter the estimated hours")?;
        let actual_hours = self.console.decimal_input("Enter the actual hours")?;
        let difficulty = self
            .console
            .number_input("Enter the project difficulty (1-5)")?;
        let notes = self.console.string_input("Enter the project notes")?;

        let project = Project {
            id: None,
            name: name.unwrap_or_default(),
            estimated_hours,
            actual_hours,
            difficulty,
            notes,
        };

        let stored = self.service.add_project(&project).await?;
        writeln!(
            self.console.out(),
            "You have successfully created project:\n{}",
            format_project_detail(&stored)
        )?;
        Ok(())
    }

    async fn list_projects(&mut self) -> CliResult<()> {
        let projects = self.service.fetch_all_projects().await?;

        let out = self.console.out();
        writeln!(out, "\nProjects:")?;
        for project in &projects {
            writeln!(out, "  {}", project)?;
        }
        Ok(())
    }

    async fn select_project(&mut self) -> CliResult<()> {
        self.list_projects().await?;
        let project_id = self
            .console
            .number_input("Enter a project ID to select a project")?;

        self.current_project = None;

        if let Some(id) = project_id {
            self.current_project = Some(self.service.fetch_project_by_id(id).await?);
        }
        Ok(())
    }

    async fn update_project_details(&mut self) -> CliResult<()> {
        let Some(current) = self.current_project.clone() else {
            writeln!(self.console.out(), "\nPlease select a project.")?;
            return Ok(());
        };

        let name = self
            .console
            .string_input(&format!("Enter the project name [{}]", current.name))?;
        let estimated_hours = self.console.decimal_input(&format!(
            "Enter the estimated hours [{}]",
            format_optional(current.estimated_hours)
        ))?;
        let actual_hours = self.console.decimal_input(&format!(
            "Enter the actual hours [{}]",
            format_optional(current.actual_hours)
        ))?;
        let difficulty = self.console.number_input(&format!(
            "Enter the project difficulty (1-5) [{}]",
            format_optional(current.difficulty)
        ))?;
        let notes = self.console.string_input(&format!(
            "Enter the project notes [{}]",
            format_optional(current.notes.as_deref())
        ))?;

        let project = Project {
            id: current.id,
            name: name.unwrap_or(current.name),
            estimated_hours: estimated_hours.or(current.estimated_hours),
            actual_hours: actual_hours.or(current.actual_hours),
            difficulty: difficulty.or(current.difficulty),
            notes: notes.or(current.notes),
        };

        self.service.modify_project_details(&project).await?;

        if let Some(id) = project.id {
            self.current_project = Some(self.service.fetch_project_by_id(id).await?);
        }
        Ok(())
    }

    async fn delete_project(&mut self) -> CliResult<()> {
        self.list_projects().await?;
        let Some(project_id) = self
            .console
            .number_input("Enter the ID of the project to delete")?
        else {
            return Ok(());
        };

        self.service.delete_project(project_id).await?;
        writeln!(
            self.console.out(),
            "Project {} was deleted successfully.",
            project_id
        )?;

        if self
            .current_project
            .as_ref()
            .is_some_and(|p| p.id == Some(project_id))
        {
            self.current_project = None;
        }
        Ok(())
    }
}
