use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::model::*;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Cannot read content file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Content must contain at least one block")]
    NoBlocks,

    #[error("Block {} has no questions", .index + 1)]
    EmptyBlock { index: usize },

    #[error("Rating scale must offer at least one option")]
    EmptyScale,

    #[error("Country list must contain at least one country")]
    NoCountries,

    #[error("Unknown country code: {code}")]
    UnknownCountry { code: String },
}

/// On-disk shape of a content file. Scale and countries are optional and
/// fall back to the built-in lists.
#[derive(Debug, Serialize, Deserialize)]
struct ContentFile {
    blocks: Vec<QuestionBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scale: Option<Vec<RatingOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    countries: Option<Vec<CountryOption>>,
}

pub fn load_content(path: &Path) -> Result<EvaluationContent, ContentError> {
    let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_content(&text)
}

pub fn parse_content(text: &str) -> Result<EvaluationContent, ContentError> {
    let file: ContentFile = serde_yaml::from_str(text)?;
    let content = EvaluationContent {
        blocks: file.blocks,
        scale: file.scale.unwrap_or_else(builtin_scale),
        countries: file.countries.unwrap_or_else(builtin_countries),
    };
    validate(&content)?;
    Ok(content)
}

pub fn validate(content: &EvaluationContent) -> Result<(), ContentError> {
    if content.blocks.is_empty() {
        return Err(ContentError::NoBlocks);
    }
    if let Some(index) = content.blocks.iter().position(|b| b.questions.is_empty()) {
        return Err(ContentError::EmptyBlock { index });
    }
    if content.scale.is_empty() {
        return Err(ContentError::EmptyScale);
    }
    if content.countries.is_empty() {
        return Err(ContentError::NoCountries);
    }
    Ok(())
}

/// Index of the country with dial code `code`. Accepts the code with or
/// without its leading `+`.
pub fn find_country(content: &EvaluationContent, code: &str) -> Result<usize, ContentError> {
    let wanted = code.trim().trim_start_matches('+');
    content
        .countries
        .iter()
        .position(|c| c.code.trim_start_matches('+') == wanted)
        .ok_or_else(|| ContentError::UnknownCountry {
            code: code.to_string(),
        })
}

/// Stable `sha256:` fingerprint of the question table and scale.
pub fn fingerprint(content: &EvaluationContent) -> Result<String, ContentError> {
    let file = ContentFile {
        blocks: content.blocks.clone(),
        scale: Some(content.scale.clone()),
        countries: None,
    };
    let canonical = serde_yaml::to_string(&file)?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let result = hasher.finalize();
    Ok(format!("sha256:{}", hex_encode(&result)))
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn print_summary(content: &EvaluationContent) -> Result<(), ContentError> {
    println!("Blocks: {}", content.blocks.len());
    for (i, block) in content.blocks.iter().enumerate() {
        println!("  {}. {} ({} questions)", i + 1, block.title, block.questions.len());
    }
    println!("Questions: {}", content.total_questions());
    let values: Vec<String> = content.scale.iter().map(|r| r.value.to_string()).collect();
    println!("Scale: {}", values.join(", "));
    println!("Countries: {}", content.countries.len());
    println!("Fingerprint: {}", fingerprint(content)?);
    Ok(())
}

pub fn builtin() -> EvaluationContent {
    EvaluationContent {
        blocks: builtin_blocks(),
        scale: builtin_scale(),
        countries: builtin_countries(),
    }
}

fn block(title: &str, description: &str, questions: &[&str]) -> QuestionBlock {
    QuestionBlock {
        title: title.to_string(),
        subtitle: String::new(),
        description: description.to_string(),
        questions: questions.iter().map(|q| q.to_string()).collect(),
    }
}

fn builtin_blocks() -> Vec<QuestionBlock> {
    vec![
        block(
            "🔹 Bloque 1 – Equilibrio Personal",
            "Objetivo: detectar desgaste interno.",
            &[
                "Siento que estoy desperdiciando mi potencial y no avanzo como debería.",
                "Me frustro porque otros menos preparados que yo tienen más éxito.",
                "Procrastino en decisiones importantes que podrían cambiar mi vida.",
                "Siento que estoy estancado y repitiendo los mismos errores una y otra vez.",
                "Me agoto mentalmente por cosas que antes me resultaban fáciles.",
                "Tengo miedo de que se me esté acabando el tiempo para lograr mis metas.",
                "Me despierto por las noches pensando en problemas que no logro resolver.",
                "Siento que trabajo mucho pero no veo resultados proporcionales a mi esfuerzo.",
            ],
        ),
        block(
            "🔹 Bloque 2 – Relaciones",
            "Objetivo: detectar patrones de desconexión.",
            &[
                "Las personas importantes en mi vida no me valoran como merezco.",
                "Siento que doy mucho más de lo que recibo en mis relaciones.",
                "Mi familia no entiende mis decisiones profesionales y me juzga constantemente.",
                "Evito conversaciones importantes porque temo el conflicto o el rechazo.",
                "Siento que tengo que fingir ser alguien diferente para que me acepten.",
                "Mi pareja no me apoya en mis proyectos y siento que me frena en lugar de impulsarme.",
                "Me rodeo de personas que se quejan constantemente y drenan mi energía.",
                "Tengo dificultades para establecer límites claros con las personas tóxicas.",
            ],
        ),
        block(
            "🔹 Bloque 3 – Ventas / Liderazgo / Influencia",
            "Objetivo: detectar bloqueos en comunicación persuasiva.",
            &[
                "Pierdo oportunidades de negocio porque no sé cómo cerrar ventas efectivamente.",
                "Siento que no tengo la autoridad ni el respeto que debería tener en mi trabajo.",
                "Me cuesta cobrar lo que realmente valgo por mis servicios o productos.",
                "Veo cómo otros con menos experiencia consiguen mejores resultados que yo.",
                "No logro que la gente haga lo que necesito, aunque sea lo mejor para ellos.",
                "Siento que mi potencial económico está muy por debajo de lo que podría ser.",
                "Me da miedo hablar en público o presentar mis ideas ante grupos importantes.",
            ],
        ),
    ]
}

fn builtin_scale() -> Vec<RatingOption> {
    [
        (1, "Totalmente en desacuerdo"),
        (2, "En desacuerdo"),
        (3, "Neutral"),
        (4, "De acuerdo"),
        (5, "Totalmente de acuerdo"),
    ]
    .iter()
    .map(|&(value, label)| RatingOption {
        value,
        label: label.to_string(),
    })
    .collect()
}

fn builtin_countries() -> Vec<CountryOption> {
    [
        ("+34", "🇪🇸", "España", "612 34 56 78"),
        ("+52", "🇲🇽", "México", "55 1234 5678"),
        ("+54", "🇦🇷", "Argentina", "11 1234-5678"),
        ("+57", "🇨🇴", "Colombia", "300 123 4567"),
        ("+51", "🇵🇪", "Perú", "987 654 321"),
        ("+56", "🇨🇱", "Chile", "9 8765 4321"),
    ]
    .iter()
    .map(|&(code, flag, name, placeholder)| CountryOption {
        code: code.to_string(),
        flag: flag.to_string(),
        name: name.to_string(),
        placeholder: placeholder.to_string(),
    })
    .collect()
}
