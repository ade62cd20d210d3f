use serde::Deserialize;
use std::borrow::Cow;
use std::path::Path;

/// One-shot guidance for the model: a noncompliant resolution, its corrected
/// version and a written account of what changed and why.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkedExample {
    pub original: Cow<'static, str>,
    pub modified: Cow<'static, str>,
    pub changes: Cow<'static, str>,
}

impl WorkedExample {
    /// Load an alternative example from a TOML file with `original`,
    /// `modified` and `changes` keys
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read worked example {}", path.display()))?;
        let example = toml::from_str(&content)
            .with_context(|| format!("Failed to parse worked example {}", path.display()))?;
        Ok(example)
    }
}

impl Default for WorkedExample {
    fn default() -> Self {
        BROOKLYN_DATA_ANALYTICS
    }
}

/// Brooklyn College BA in Data Analytics, before and after correction
pub const BROOKLYN_DATA_ANALYTICS: WorkedExample = WorkedExample {
    original: Cow::Borrowed(ORIGINAL),
    modified: Cow::Borrowed(MODIFIED),
    changes: Cow::Borrowed(CHANGES),
};

const ORIGINAL: &str = r##"
        Board of Trustees of the City University of New York

        RESOLUTION TO

        Establish a Bachelor of Arts in Data Analytics at Brooklyn College

        February 28, 2025

        WHEREAS, Knowledge of data practices, ranging from programming to statistics to data story-telling and visualization, is in high demand in the contemporary labor market, according to the US Department of Labor, with expected growth in New York State between 10% and 43% over the next ten years; and

        WHEREAS, The typical approach to undergraduate programs in the field (including data analytics in various forms as well as data science) has tended to stress technical skills. Much less attention has been paid in undergraduate programs to a broad perspective—data practices in society, or the "data landscape"—and the integration of data skills and training in contexts, organizations, and communities; and

        WHEREAS, Brooklyn College is proposing the establishment of a Bachelor of Arts ("BA") program in Data Analytics, organized around the idea of data acumen, or the ability to make creative, sound judgments and decisions with data. This approach requires a solid foundation in data skills, such as programming in Python, statistics and probability, and data visualization. But it goes beyond this foundation by bringing to bear deep knowledge of communication and contexts from the social and behavioral sciences, and;

        WHEREAS, The proposed 58- to 72.5-credit Bachelor of Arts program tracks to capture a diverse population of students across the behavioral, natural, and social sciences. The first track is for social and behavioral science or humanities students who are interested in careers in data analytics. Students in this track take statistics and data analysis courses in the department of Management, Marketing, and Entrepreneurship, Economics, Psychology, or Sociology. The second track is intended for STEM students who are interested in more mathematics-oriented careers in data science; and

        WHEREAS, The proposed Bachelor of Arts program will be housed in the School of Natural and Behavioral Sciences with participation of the Departments of Computer and Informational Science, Mathematics, Economics, Management, Marketing and Entrepreneurship, Psychology, Sociology, and Communication Arts, Sciences and Disorders; and

        WHEREAS, Students completing the program will acquire the knowledge and skills necessary for career advancement in areas of data management, data analytics, data visualization, and data communications in a variety of employment settings; and

        WHEREAS, The proposed Bachelor of Arts program has an articulation agreement with the Associate of Science program in data science at Borough of Manhattan Community College. Further, possible connections with other University programs at the undergraduate and graduate levels, as well as programs of the City of New York to promote data careers, ensures a reliable pipeline of students into the professions; and

        WHEREAS, The predicted enrollment and retention of students in the BA in Data Analytics, based on existing student interest as well as substantial and expanding market demand for graduates with this qualification, is expected to generate robust growth. The program will increase revenue while containing costs through the use of existing faculty, curriculum, and college resources; and

        NOW, THEREFORE, BE IT

        RESOLVED, That the Board of Trustees of the City University of New York
        authorizes the proposed program in Data Analytics leading to the Bachelor of Arts degree at Brooklyn College be presented to the New York State Education Department for their consideration and registration in accordance with any and all regulations of the New York State Department of Education ("NYSED") for their consideration and registration in accordance with any and all of NYSED's regulations, subject to financial ability. 

        EXPLANATION: The proposed program will build upon a strong foundation in data analysis and quantitative methods, drawing on existing faculty expertise across three schools at Brooklyn College. It will serve The City University of New York's mission to prepare its diverse population of students for the future of work in data careers. It will allow students to develop the necessary skills for academic and professional advancement in this fast-growing area while ensuring equity and access to this vital professional field.
        "##;

const MODIFIED: &str = r##"
        Board of Trustees of the City University of New York

        RESOLUTION TO

        Establish a Bachelor of Arts in Data Analytics at Brooklyn College

        February 28, 2025

        WHEREAS, In the contemporary labor market, knowledge of data practices, everything from programming to statistics to data story-telling and visualization, is in high demand, according to the US Department of Labor, with expected growth in New York State between 10% and 43% over the next ten years; and

        WHEREAS, The typical approach to undergraduate programs in the field (including data analytics in various forms as well as data science) has tended to stress technical skills with less attention focusing on designing undergraduate programs that take a broad perspective—data practices in society, or the "data landscape"—and the integration of data skills and training in contexts, organizations, and communities; and

        WHEREAS, Brooklyn College is proposing the establishment of a Bachelor of Arts ("BA") program in Data Analytics, organized around the idea of data acumen, or the ability to make creative, sound judgments and decisions with data taking an approach requires a solid foundation in data skills, such as programming in Python, statistics and probability, and data visualization but also goes beyond this foundation by bringing to bear deep knowledge of communication and contexts from the social and behavioral sciences, and;

        WHEREAS, The proposed 58- to 72.5-credit Bachelor of Arts program provides students with the capability to acquire knowledge and skills necessary for career development in areas of data management, data analytics, data visualization, and data communications in a variety of employment settings make possible though the inclusion of two tracks capturing a diverse population of students with the first track targeting social and behavioral science or humanities students who are interested in careers in data analytics with them completing courses in statistics and data analysis and the second track targeting STEM students who are interested in more mathematics-oriented careers in data science; and

        WHEREAS, The proposed Bachelor of Arts program is interdisciplinary being housed in the School of Natural and Behavioral Sciences and in partnership with the Departments of Computer and Informational Science, Mathematics, Economics, Management, Marketing and Entrepreneurship, Psychology, Sociology, and Communication Arts, Sciences and Disorders; and

        WHEREAS, The proposed Bachelor of Arts program has an articulation agreement with the Associate of Science program in data science at Borough of Manhattan Community College with possible connections with other University programs at the undergraduate and graduate levels, as well as programs of the City of New York to promote data careers, ensuring a reliable pipeline of students into the professions; and

        WHEREAS, The predicted enrollment and retention of students in the Bachelor of Arts in Data Analytics, based on existing student interest as well as substantial and expanding market demand for graduates with this qualification, is expected to generate robust growth and the program will increase revenue while containing costs through the use of existing faculty, curricula, and college resources.

        NOW, THEREFORE, BE IT

        RESOLVED, That the Board of Trustees of the City University of New York
        authorizes the proposed program in Data Analytics leading to the Bachelor of Arts degree at Brooklyn College be presented to the New York State Education Department for their consideration and registration in accordance with any and all regulations of the New York State Department of Education ("NYSED") for their consideration and registration in accordance with any and all of NYSED's regulations, subject to financial ability. 

        EXPLANATION: The proposed program will build upon a strong foundation in data analysis and quantitative methods, drawing on existing faculty expertise across three schools at Brooklyn College. It will serve The City University of New York's mission to prepare its diverse population of students for the future of work in data careers as well as help fill the growing market demand for professionals with the skills and background in diverse data practices. It will allow students to develop the necessary skills for academic and professional advancement in this fast-growing area while ensuring equity and access to this vital professional field by targeting students across a range of disciplinary backgrounds from humanities to social sciences to STEM.
        "##;

const CHANGES: &str = r##"

        In the first 'WHEREAS' clause, the positiong of the phrase 'In the contemporary labor market,' is changed, inserting it first instead of writing it last, removing 'K'. 'everything' is replaced with 'ranging'.

        In the second 'WHEREAS' clause, there is a period (full-stop), violating a rule. So 'Much' has been replaced by 'with'. 'has been paid' has been replaced with 'focusing on designing'. 'to a' has been replaced with 'that take a'.

        In the third 'WHEREAS' clause, there are periods (full-stop), that violates a rule. So 'with data. This' is replaced with 'with data taking an'. 'that' is added for proper sentence structuing. 'data visualization. But it' is replaced with 'data visualization but also'.

        In the fourth 'WHEREAS' clause, there are periods (full-stop), that violates a rule. The paragraph is also formatted properly. The text 'provides students with the capability to acquire knowledge and skills necessary for career development in areas of data management, data analytics, data visualization, and data communications in a variety of employment settings make possible though the inclusion of' is the sixth 'WHEREAS' claues in the original, but is inserted at the beginning of this clause. Multiple grammatical and syntactic changes are also made.

        In the fifth 'WHEREAS' clause, certain formatting is done, both grammatical and syntactic.

        The sixth 'WHEREAS' clause is completely removed, and inserted in the beginning of the fourth 'WHEREAS' clause.

        The seventh 'WHEREAS' clause has a period (full-stop) that is dealt with accordingly, keeping the rest of the content same.

        The eight 'WHEREAS' clause has a period (full-stop) and it ends with '; and' which are violations. Minor grammatical changes are done. Also, the full-form of 'BA' instead of the abbreviation is also done, indicating professionalism of the resolution.

        The 'NOW, THEREFORE, BE IT' is correct.

        The 'RESOLVED,' clause is also correct.

        In the 'EXPLANATION' part, two sentences are added at the end, which are 'as well as help fill the growing market demand for professionals with the skills and background in diverse data practices' and ' by targeting students across a range of disciplinary backgrounds from humanities to social sciences to STEM'.
        
        SUMMARY:- Overall there are multiple modifications needed in the original version, including grammatical and syntactic changes. Certain rules are violated, which are handled accordingly. In general, the original resolution broadly talks in accordance with the template rules and address the points in order.
        "##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_builtin_example() {
        assert_eq!(WorkedExample::default(), BROOKLYN_DATA_ANALYTICS);
    }

    #[test]
    fn test_builtin_example_shape() {
        assert!(ORIGINAL.contains("Establish a Bachelor of Arts in Data Analytics at Brooklyn College"));
        // The original's last WHEREAS clause wrongly ends with "; and"
        assert!(ORIGINAL.contains("college resources; and"));
        assert!(MODIFIED.contains("college resources.\n"));
        assert!(CHANGES.contains("SUMMARY:-"));
    }

    #[test]
    fn test_load_example_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("example.toml");
        std::fs::write(
            &path,
            "original = \"WHEREAS, a. b; and\"\nmodified = \"WHEREAS, a b.\"\nchanges = \"Removed the period.\"\n",
        )
        .unwrap();

        let example = WorkedExample::load(&path).unwrap();
        assert_eq!(example.original, "WHEREAS, a. b; and");
        assert_eq!(example.modified, "WHEREAS, a b.");
        assert_eq!(example.changes, "Removed the period.");
    }

    #[test]
    fn test_load_example_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("example.toml");
        std::fs::write(&path, "original = \"x\"\n").unwrap();
        assert!(WorkedExample::load(&path).is_err());
    }
}
