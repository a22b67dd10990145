use crate::application::dto::ProjectFeedState;
use crate::portfolio::domain::DisplayProject;
use crate::ports::outbound::ProjectFormatter;
use crate::shared::Result;

/// Markdown table header for the project overview
const TABLE_HEADER: &str =
    "| Proyecto | Tipo | Tecnologías | Categoría | Estrellas | PageSpeed | Entrega |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|----------|------|-------------|-----------|-----------|-----------|---------|\n";

const LOADING_TEXT: &str = "_Cargando proyectos..._\n";

const EMPTY_TEXT: &str = "_No hay proyectos para mostrar._\n";

/// MarkdownFormatter adapter rendering the feed as a portfolio page
///
/// Loaded feeds get an overview table followed by one card section per
/// project; errored feeds render the message as a warning quote.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, output: &mut String) {
        output.push_str("# Portafolio\n\n");
    }

    fn render_overview(&self, output: &mut String, projects: &[DisplayProject]) {
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for project in projects {
            output.push_str(&format!(
                "| [{}]({}) | {} | {} | {} | {} | {} | {} días |\n",
                Self::escape_markdown_table_cell(&project.client),
                project.url,
                Self::escape_markdown_table_cell(&project.project_type),
                Self::escape_markdown_table_cell(&project.technologies.join(", ")),
                project.category,
                project.github.stars,
                project.metrics.pagespeed,
                project.metrics.delivery_days
            ));
        }
        output.push('\n');
    }

    fn render_card(&self, output: &mut String, project: &DisplayProject) {
        output.push_str(&format!("## {}\n\n", project.client));
        output.push_str(&format!("![{}]({})\n\n", project.github.name, project.thumbnail));
        output.push_str(&format!("**{}** · {}\n\n", project.title, project.project_type));
        output.push_str(&format!("{}\n\n", project.description));
        if !project.technologies.is_empty() {
            let badges: Vec<String> = project
                .technologies
                .iter()
                .map(|t| format!("`{}`", t))
                .collect();
            output.push_str(&format!("{}\n\n", badges.join(" ")));
        }
        output.push_str(&format!(
            "- Lenguaje: {}\n- Actualizado: {}\n- [Ver Proyecto]({})\n\n",
            project.github.language,
            project.github.updated_at.format("%Y-%m-%d"),
            project.url
        ));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectFormatter for MarkdownFormatter {
    fn format(&self, state: &ProjectFeedState) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output);

        match state {
            ProjectFeedState::Loading => output.push_str(LOADING_TEXT),
            ProjectFeedState::Errored { message } => {
                output.push_str(&format!("> ⚠️ {}\n", message));
            }
            ProjectFeedState::Loaded { projects } if projects.is_empty() => {
                output.push_str(EMPTY_TEXT);
            }
            ProjectFeedState::Loaded { projects } => {
                self.render_overview(&mut output, projects);
                for project in projects {
                    self.render_card(&mut output, project);
                }
            }
        }

        Ok(output)
    }
}
