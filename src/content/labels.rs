use super::Locale;

/// Every user-facing UI string, per locale. Kept as plain statics so a
/// locale switch is an atomic pointer swap with no allocation.
#[derive(Debug)]
pub struct UiLabels {
    pub nav: NavLabels,
    pub footer: FooterLabels,
    pub hero: HeroLabels,
    pub metrics: MetricsLabels,
    pub experience: ExperienceLabels,
    pub education: EducationLabels,
    pub skills: SkillsLabels,
    pub contact: ContactLabels,
    pub palette: PaletteLabels,
}

#[derive(Debug)]
pub struct NavLabels {
    pub home: &'static str,
    pub metrics: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub contact: &'static str,
    pub online: &'static str,
}

#[derive(Debug)]
pub struct FooterLabels {
    pub status: &'static str,
    pub online: &'static str,
    pub branch: &'static str,
    pub branch_value: &'static str,
    pub region: &'static str,
    pub region_value: &'static str,
}

#[derive(Debug)]
pub struct HeroLabels {
    pub eyebrow: &'static str,
    pub skip: &'static str,
    pub loading_profile: &'static str,
    pub show_json: &'static str,
    pub hide_json: &'static str,
    pub recruiter_command: &'static str,
    pub quick_role: &'static str,
    pub quick_impact: &'static str,
    pub quick_reliability: &'static str,
    pub quick_location: &'static str,
    pub kpi_experience_label: &'static str,
    pub years_suffix: &'static str,
    pub copy_output: &'static str,
    pub output_copied: &'static str,
    pub terminal_user: &'static str,
}

#[derive(Debug)]
pub struct MetricsLabels {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub case_studies_title: &'static str,
    pub case_studies_description: &'static str,
    pub challenge_label: &'static str,
    pub action_label: &'static str,
    pub result_label: &'static str,
    pub stack_label: &'static str,
    pub trend_up: &'static str,
    pub trend_stable: &'static str,
    pub trend_processing: &'static str,
}

#[derive(Debug)]
pub struct ExperienceLabels {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub active: &'static str,
}

#[derive(Debug)]
pub struct EducationLabels {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct SkillsLabels {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub core: &'static str,
    pub dev: &'static str,
    pub observability: &'static str,
    pub learning: &'static str,
    pub compiling: &'static str,
    pub stable: &'static str,
}

#[derive(Debug)]
pub struct ContactLabels {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub copied: &'static str,
    pub copy_success: &'static str,
    pub copy_error: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug)]
pub struct PaletteLabels {
    pub trigger: &'static str,
    pub placeholder: &'static str,
    pub empty: &'static str,
    pub section_navigation: &'static str,
    pub section_social: &'static str,
    pub section_system: &'static str,
    pub item_home: &'static str,
    pub item_metrics: &'static str,
    pub item_experience: &'static str,
    pub item_skills: &'static str,
    pub item_github: &'static str,
    pub item_linkedin: &'static str,
    pub item_email: &'static str,
    pub item_lang_es: &'static str,
    pub item_lang_en: &'static str,
    pub item_download_cv: &'static str,
    pub download_done: &'static str,
    pub download_error: &'static str,
    pub open_error: &'static str,
}

static LABELS_ES: UiLabels = UiLabels {
    nav: NavLabels {
        home: "Inicio",
        metrics: "Métricas",
        experience: "Experiencia",
        education: "Educación",
        skills: "Skills",
        contact: "Contacto",
        online: "Online",
    },
    footer: FooterLabels {
        status: "Status",
        online: "Online",
        branch: "Branch",
        branch_value: "main",
        region: "Region",
        region_value: "EU-West",
    },
    hero: HeroLabels {
        eyebrow: "// DevOps & Platform Engineering",
        skip: "Saltar",
        loading_profile: "Cargando perfil...",
        show_json: "Ver JSON",
        hide_json: "Ocultar JSON",
        recruiter_command: "recruiter-summary --quick",
        quick_role: "Rol",
        quick_impact: "Impacto",
        quick_reliability: "Fiabilidad",
        quick_location: "Ubicación",
        kpi_experience_label: "Experiencia",
        years_suffix: "años",
        copy_output: "Copiar output",
        output_copied: "¡Copiado!",
        terminal_user: "jjimenez@devops ~ $",
    },
    metrics: MetricsLabels {
        eyebrow: "// System Metrics",
        title: "Impacto Medible",
        description: "Métricas reales de reducción de tiempos, disponibilidad y optimización en entornos productivos.",
        case_studies_title: "Impacto",
        case_studies_description: "Ejemplos de proyectos donde se aplicó enfoque DevOps con resultados cuantificables.",
        challenge_label: "Reto",
        action_label: "Acción",
        result_label: "Resultado",
        stack_label: "Tecnologías",
        trend_up: "Trending Up",
        trend_stable: "Stable",
        trend_processing: "Processing",
    },
    experience: ExperienceLabels {
        eyebrow: "// Deployment Pipeline",
        title: "Experiencia Profesional",
        description: "Trayectoria desde desarrollo de software hasta ingeniería de plataformas y DevOps.",
        active: "ACTIVE",
    },
    education: EducationLabels {
        eyebrow: "// Credentials",
        title: "Educación",
        description: "Formación académica en ingeniería y telecomunicaciones.",
    },
    skills: SkillsLabels {
        eyebrow: "// Skill Matrix",
        title: "Stack Tecnológico",
        description: "Competencias core sólidas y tecnologías en proceso de adopción, diferenciadas por estado operativo.",
        core: "Infraestructura Core",
        dev: "Desarrollo",
        observability: "Observabilidad",
        learning: "Ruta de Aprendizaje",
        compiling: "COMPILING...",
        stable: "STABLE",
    },
    contact: ContactLabels {
        eyebrow: "// Connect",
        title: "Contacto",
        description: "¿Tienes un proyecto o una propuesta? No dudes en contactarme.",
        copied: "¡Copiado!",
        copy_success: "Email copiado: {email}",
        copy_error: "No se pudo copiar el email",
        linkedin: "LinkedIn",
    },
    palette: PaletteLabels {
        trigger: "Comandos",
        placeholder: "Escribe un comando o busca...",
        empty: "Sin resultados.",
        section_navigation: "Navegación",
        section_social: "Social",
        section_system: "Sistema",
        item_home: "Ir a Inicio",
        item_metrics: "Ir a Métricas",
        item_experience: "Ir a Experiencia",
        item_skills: "Ir a Skills",
        item_github: "Abrir GitHub",
        item_linkedin: "Abrir LinkedIn",
        item_email: "Enviar Email",
        item_lang_es: "Cambiar a Español",
        item_lang_en: "Switch to English",
        item_download_cv: "Descargar CV",
        download_done: "CV exportado: {path}",
        download_error: "No se pudo exportar el CV",
        open_error: "No se pudo abrir el enlace",
    },
};

static LABELS_EN: UiLabels = UiLabels {
    nav: NavLabels {
        home: "Home",
        metrics: "Metrics",
        experience: "Experience",
        education: "Education",
        skills: "Skills",
        contact: "Contact",
        online: "Online",
    },
    footer: FooterLabels {
        status: "Status",
        online: "Online",
        branch: "Branch",
        branch_value: "main",
        region: "Region",
        region_value: "EU-West",
    },
    hero: HeroLabels {
        eyebrow: "// DevOps & Platform Engineering",
        skip: "Skip",
        loading_profile: "Loading profile data...",
        show_json: "Show JSON",
        hide_json: "Hide JSON",
        recruiter_command: "recruiter-summary --quick",
        quick_role: "Role",
        quick_impact: "Impact",
        quick_reliability: "Reliability",
        quick_location: "Location",
        kpi_experience_label: "Experience",
        years_suffix: "years",
        copy_output: "Copy output",
        output_copied: "Copied!",
        terminal_user: "jjimenez@devops ~ $",
    },
    metrics: MetricsLabels {
        eyebrow: "// System Metrics",
        title: "Measured Impact",
        description: "Real-world metrics on delivery speed, reliability, and optimization in production environments.",
        case_studies_title: "Impact",
        case_studies_description: "Selected projects showing DevOps execution with measurable business and platform outcomes.",
        challenge_label: "Challenge",
        action_label: "Action",
        result_label: "Result",
        stack_label: "Stack",
        trend_up: "Trending Up",
        trend_stable: "Stable",
        trend_processing: "Processing",
    },
    experience: ExperienceLabels {
        eyebrow: "// Deployment Pipeline",
        title: "Professional Experience",
        description: "Career journey from software development to platform engineering and DevOps.",
        active: "ACTIVE",
    },
    education: EducationLabels {
        eyebrow: "// Credentials",
        title: "Education",
        description: "Academic background in engineering and telecommunication systems.",
    },
    skills: SkillsLabels {
        eyebrow: "// Skill Matrix",
        title: "Technology Stack",
        description: "Strong core competencies and technologies currently being adopted, grouped by operational maturity.",
        core: "Core Infrastructure",
        dev: "Development",
        observability: "Observability",
        learning: "Learning Path",
        compiling: "COMPILING...",
        stable: "STABLE",
    },
    contact: ContactLabels {
        eyebrow: "// Connect",
        title: "Contact",
        description: "Have a project or proposal? Feel free to reach out.",
        copied: "Copied!",
        copy_success: "Email copied: {email}",
        copy_error: "Could not copy email",
        linkedin: "LinkedIn",
    },
    palette: PaletteLabels {
        trigger: "Commands",
        placeholder: "Type a command or search...",
        empty: "No results found.",
        section_navigation: "Navigation",
        section_social: "Social",
        section_system: "System",
        item_home: "Go to Home",
        item_metrics: "Go to Metrics",
        item_experience: "Go to Experience",
        item_skills: "Go to Skills",
        item_github: "Open GitHub",
        item_linkedin: "Open LinkedIn",
        item_email: "Send Email",
        item_lang_es: "Cambiar a español",
        item_lang_en: "Switch to English",
        item_download_cv: "Download CV",
        download_done: "CV exported: {path}",
        download_error: "Could not export the CV",
        open_error: "Could not open the link",
    },
};

impl UiLabels {
    pub fn for_locale(locale: Locale) -> &'static UiLabels {
        match locale {
            Locale::Es => &LABELS_ES,
            Locale::En => &LABELS_EN,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Locale::Es)]
    #[case(Locale::En)]
    fn labels_are_non_empty(#[case] locale: Locale) {
        let labels = UiLabels::for_locale(locale);
        assert!(!labels.nav.home.is_empty());
        assert!(!labels.hero.terminal_user.is_empty());
        assert!(!labels.palette.trigger.is_empty());
        assert!(!labels.palette.empty.is_empty());
        assert!(!labels.contact.copy_error.is_empty());
    }

    #[test]
    fn copy_success_carries_email_placeholder() {
        for labels in [UiLabels::for_locale(Locale::Es), UiLabels::for_locale(Locale::En)] {
            assert!(labels.contact.copy_success.contains("{email}"));
            assert!(labels.palette.download_done.contains("{path}"));
        }
    }
}
