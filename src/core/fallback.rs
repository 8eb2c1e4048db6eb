use crate::domain::cards::{NoticeLink, SetupNotice};
use crate::domain::model::{CustomFields, Post, Rendered};

const SITE_URL: &str = "https://cockpit4me.de";

fn demo_post(id: u64, title: &str, excerpt: &str, slug: &str) -> Post {
    Post {
        id,
        title: Rendered::new(title),
        excerpt: Rendered::new(excerpt),
        content: Rendered::new(excerpt),
        date: "2024-01-15T09:00:00".to_string(),
        modified: None,
        link: format!("{}/{}", SITE_URL, slug),
        author: None,
        categories: Vec::new(),
        tags: Vec::new(),
        featured_media: None,
        post_type: Some("post".to_string()),
        acf: None,
        embedded: None,
    }
}

fn with_fields(mut post: Post, fields: &[(&str, &str)]) -> Post {
    let mut custom = CustomFields::default();
    for (key, value) in fields {
        custom.set(key, value);
    }
    post.acf = Some(custom);
    post
}

/// Demo advisor profiles shown while the CMS team category is empty.
pub fn demo_advisors() -> Vec<Post> {
    vec![
        with_fields(
            demo_post(
                9001,
                "Dr. Katharina Brandt",
                "<p>Begleitet Führungsteams durch strategische Neuausrichtungen.</p>",
                "team/katharina-brandt",
            ),
            &[
                ("berater_position", "Managing Partner"),
                ("berater_location", "Hamburg"),
                ("berater_specialties", "Strategieberatung, Leadership, Transformation"),
                ("berater_experience", "20 Jahre Beratungserfahrung"),
                ("berater_languages", "Deutsch, Englisch"),
            ],
        ),
        with_fields(
            demo_post(
                9002,
                "Markus Feldmann",
                "<p>Entwickelt Führungskräfte in mittelständischen Unternehmen.</p>",
                "team/markus-feldmann",
            ),
            &[
                ("berater_position", "Senior Berater"),
                ("berater_location", "München"),
                ("berater_specialties", "Führung, Change, Prozess"),
                ("berater_education", "Diplom-Psychologe"),
            ],
        ),
        with_fields(
            demo_post(
                9003,
                "Sandra Okoye",
                "<p>Bringt digitale Transformationsprogramme in die Umsetzung.</p>",
                "team/sandra-okoye",
            ),
            &[
                ("berater_position", "Senior Beraterin"),
                ("berater_location", "Berlin"),
                ("berater_specialties", "Digital, Innovation, Transformation"),
                ("berater_certifications", "Systemische Organisationsentwicklung"),
            ],
        ),
    ]
}

/// Demo portfolio projects shown while no portfolio items exist.
pub fn demo_projects() -> Vec<Post> {
    vec![
        with_fields(
            demo_post(
                9101,
                "Neuausrichtung Vertrieb Maschinenbau",
                "<p>Vertriebsstrategie und Führungsmodell für einen Maschinenbauer.</p>",
                "portfolio/vertrieb-maschinenbau",
            ),
            &[
                ("client_name", "Mittelständischer Maschinenbauer"),
                ("project_type", "Strategieberatung"),
                ("technologies", "Vertriebsanalyse, Zielbild, Coaching"),
                ("completion_date", "2023"),
            ],
        ),
        with_fields(
            demo_post(
                9102,
                "Führungskräfteprogramm Logistik",
                "<p>Entwicklungsprogramm für 40 Führungskräfte eines Logistikers.</p>",
                "portfolio/fuehrung-logistik",
            ),
            &[
                ("client_name", "Logistikdienstleister"),
                ("project_type", "Leadership-Entwicklung"),
                ("technologies", "Workshops, 360-Feedback, Mentoring"),
                ("completion_date", "2024"),
            ],
        ),
        with_fields(
            demo_post(
                9103,
                "Digitale Transformation Handel",
                "<p>Begleitung eines Handelsunternehmens in die digitale Organisation.</p>",
                "portfolio/digital-handel",
            ),
            &[
                ("client_name", "Handelsgruppe"),
                ("project_type", "Transformation"),
                ("technologies", "Operating Model, Agile Methoden"),
                ("completion_date", "2024"),
            ],
        ),
    ]
}

/// Demo news entries shown while the blog is empty.
pub fn demo_news() -> Vec<Post> {
    vec![
        demo_post(
            9201,
            "Führung in unsicheren Zeiten",
            "<p>Warum Orientierung heute wichtiger ist als Kontrolle.</p>",
            "blog/fuehrung-unsichere-zeiten",
        ),
        demo_post(
            9202,
            "Transformation beginnt im Kopf",
            "<p>Drei Denkfehler, die Veränderungsprogramme ausbremsen.</p>",
            "blog/transformation-denkfehler",
        ),
        demo_post(
            9203,
            "Was gute Strategiearbeit ausmacht",
            "<p>Strategie ist kein Dokument, sondern eine Praxis.</p>",
            "blog/gute-strategiearbeit",
        ),
    ]
}

pub fn team_notice() -> SetupNotice {
    SetupNotice {
        headline: "Team-Seite wird aufgebaut".to_string(),
        message: "Unsere Berater-Profile werden gerade eingerichtet. Besuchen Sie \
                  unsere Hauptwebsite für Informationen über unser Team."
            .to_string(),
        links: vec![
            NoticeLink {
                label: "Team kennenlernen".to_string(),
                url: format!("{}/team", SITE_URL),
            },
            NoticeLink {
                label: "Kontakt aufnehmen".to_string(),
                url: format!("{}/kontakt", SITE_URL),
            },
        ],
    }
}

pub fn portfolio_notice() -> SetupNotice {
    SetupNotice {
        headline: "Portfolio wird aufgebaut".to_string(),
        message: "Unsere Referenzprojekte werden gerade eingerichtet. Das vollständige \
                  Portfolio finden Sie auf unserer Hauptwebsite."
            .to_string(),
        links: vec![
            NoticeLink {
                label: "Vollständiges Portfolio".to_string(),
                url: format!("{}/portfolio", SITE_URL),
            },
            NoticeLink {
                label: "Projekt besprechen".to_string(),
                url: format!("{}/kontakt", SITE_URL),
            },
        ],
    }
}

pub fn news_notice() -> SetupNotice {
    SetupNotice {
        headline: "Aktuelles wird aufgebaut".to_string(),
        message: "Neue Beiträge erscheinen in Kürze. Aktuelle Informationen finden Sie \
                  auf unserer Hauptwebsite."
            .to_string(),
        links: vec![NoticeLink {
            label: "Zur Website".to_string(),
            url: SITE_URL.to_string(),
        }],
    }
}
