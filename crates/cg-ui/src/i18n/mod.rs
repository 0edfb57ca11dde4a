//! Bilingual string tables
//!
//! Two static lookup tables, German and English, carrying the site's
//! published text. There is no framework behind this; the tables are the
//! whole mechanism, and the chosen language is the only persisted
//! preference.

use serde::{Deserialize, Serialize};

/// Storage key for the persisted language preference
pub const LANGUAGE_STORAGE_KEY: &str = "cgi-language";

/// Display language of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// Parse a stored preference; anything unrecognized falls back to German
    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some("en") => Language::En,
            _ => Language::De,
        }
    }

    /// The string table for this language
    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::De => &DE,
            Language::En => &EN,
        }
    }
}

/// All user-facing text, grouped per page section
pub struct Strings {
    pub header: HeaderStrings,
    pub hero: HeroStrings,
    pub about: AboutStrings,
    pub church_life: ChurchLifeStrings,
    pub contact: ContactStrings,
    pub footer: FooterStrings,
}

pub struct HeaderStrings {
    pub brand_line1: &'static str,
    pub brand_line2: &'static str,
    pub home: &'static str,
    pub about: &'static str,
    pub church_life: &'static str,
    pub contact: &'static str,
}

impl HeaderStrings {
    /// Nav label for a section identifier
    pub fn label_for(&self, id: &str) -> Option<&'static str> {
        match id {
            "home" => Some(self.home),
            "about" => Some(self.about),
            "church-life" => Some(self.church_life),
            "contact" => Some(self.contact),
            _ => None,
        }
    }
}

pub struct HeroStrings {
    pub welcome: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub service_times: &'static str,
    pub sunday_service: &'static str,
    pub sunday_time: &'static str,
    pub prayer_meeting: &'static str,
    pub prayer_time: &'static str,
    pub location: &'static str,
    pub join_us: &'static str,
    pub learn_more: &'static str,
}

pub struct AboutStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub mission: &'static str,
    pub mission_text: &'static str,
    pub values: &'static str,
    pub value_items: [(&'static str, &'static str); 4],
}

pub struct ChurchLifeStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sunday_service_title: &'static str,
    pub sunday_service_desc: &'static str,
    pub sunday_service_time: &'static str,
    pub sunday_service_details: &'static str,
    pub prayer_hour_title: &'static str,
    pub prayer_hour_desc: &'static str,
    pub prayer_hour_time: &'static str,
    pub prayer_hour_details: &'static str,
    pub prayer_link_label: &'static str,
    pub prayer_link_url: &'static str,
    pub what_to_expect: &'static str,
    pub expect_items: [(&'static str, &'static str); 4],
}

pub struct ContactStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub address_title: &'static str,
    pub address: &'static str,
    pub times_title: &'static str,
    pub sunday: &'static str,
    pub wednesday: &'static str,
    pub visit_title: &'static str,
    pub visit_text: &'static str,
    pub first_time_title: &'static str,
    pub first_time_text: &'static str,
    pub form_title: &'static str,
    pub form_name: &'static str,
    pub form_name_placeholder: &'static str,
    pub form_email: &'static str,
    pub form_email_placeholder: &'static str,
    pub form_message: &'static str,
    pub form_message_placeholder: &'static str,
    pub form_submit: &'static str,
    pub form_success: &'static str,
    pub form_required: &'static str,
    pub form_email_invalid: &'static str,
}

pub struct FooterStrings {
    pub tagline: &'static str,
    pub quick_links: &'static str,
    pub service_times: &'static str,
    pub sunday: &'static str,
    pub wednesday: &'static str,
    pub copyright: &'static str,
}

static DE: Strings = Strings {
    header: HeaderStrings {
        brand_line1: "Christliche Gemeinde",
        brand_line2: "International e.V.",
        home: "Home",
        about: "Über uns",
        church_life: "Church Life",
        contact: "Contact",
    },
    hero: HeroStrings {
        welcome: "Willkommen",
        title: "Christliche Gemeinde International e.V.",
        subtitle: "Eine internationale christliche Gemeinschaft in Nansenstraße 10 79539 Lörrach",
        service_times: "Gottesdienstzeiten",
        sunday_service: "Gottesdienst Sonntags",
        sunday_time: "12:00 - 13:30 Uhr",
        prayer_meeting: "Gebetsstunde Mittwochs",
        prayer_time: "21:00 - 22:00 Uhr",
        location: "Nansenstraße 10 79539 Lörrach, Deutschland",
        join_us: "Ihren Besuch planen",
        learn_more: "Mehr erfahren",
    },
    about: AboutStrings {
        title: "Über uns",
        subtitle: "Eine einladende internationale christliche Gemeinschaft",
        description: "Wir sind die Christliche Gemeinde International e.V., eine lebendige und vielfältige Gemeinschaft in Nansenstraße 10 79539 Lörrach. Unsere Gemeinde heißt Menschen aller Nationen willkommen und schafft einen Raum, in dem Glaube, Hoffnung und Liebe im Mittelpunkt stehen.",
        mission: "Unsere Mission",
        mission_text: "Wir möchten Menschen dabei helfen, Jesus Christus kennenzulernen und eine persönliche Beziehung zu ihm aufzubauen. Dabei legen wir Wert auf Gemeinschaft, gegenseitige Unterstützung und das gemeinsame Wachstum im Glauben.",
        values: "Unsere Werte",
        value_items: [
            ("Gemeinschaft", "Wir bauen echte Beziehungen auf und unterstützen uns gegenseitig."),
            ("International", "Wir heißen Menschen aus allen Kulturen und Nationen willkommen."),
            ("Glauben", "Wir gründen uns auf die Bibel und die Lehren Jesu Christi."),
            ("Gastfreundschaft", "Jeder ist willkommen, egal woher er kommt oder wo er steht."),
        ],
    },
    church_life: ChurchLifeStrings {
        title: "Gemeindeleben",
        subtitle: "Entdecken Sie unsere Gottesdienste und Veranstaltungen",
        sunday_service_title: "Sonntags-Gottesdienst",
        sunday_service_desc: "Unser Hauptgottesdienst",
        sunday_service_time: "Sonntags: 12:00 - 13:30 Uhr",
        sunday_service_details: "Kommen Sie und erleben Sie einen inspirierenden Gottesdienst mit Lobpreis, Gebet und biblischer Predigt. Jeder ist herzlich willkommen!",
        prayer_hour_title: "Gebetsstunde",
        prayer_hour_desc: "Gemeinsames Gebet",
        prayer_hour_time: "Mittwochs: 21:00 - 22:00 Uhr",
        prayer_hour_details: "Treffen Sie sich mit uns zum Online Gebet. Eine Zeit der Anbetung, Fürbitte und Gemeinschaft mit Gott.",
        prayer_link_label: "Jetzt online teilnehmen",
        prayer_link_url: "https://join.freeconferencecall.com/mgwangwa",
        what_to_expect: "Was Sie erwarten können",
        expect_items: [
            ("Herzlicher Empfang", "Freundliche Atmosphäre und offene Herzen"),
            ("Internationale Gemeinschaft", "Menschen aus verschiedenen Kulturen"),
            ("Biblische Lehre", "Praktische und relevante Predigten"),
            ("Lobpreis & Anbetung", "Zeitgenössische und traditionelle Musik"),
        ],
    },
    contact: ContactStrings {
        title: "Kontakt & Standort",
        subtitle: "Wir freuen uns darauf, Sie kennenzulernen",
        address_title: "Adresse",
        address: "Nansenstraße 10 79539 Lörrach, Deutschland",
        times_title: "Gottesdienstzeiten",
        sunday: "Sonntags: 12:00 - 13:30 Uhr",
        wednesday: "Mittwochs (Gebet): 21:00 - 22:00 Uhr",
        visit_title: "Besuchen Sie uns",
        visit_text: "Kommen Sie einfach vorbei! Wir freuen uns darauf, Sie willkommen zu heißen.",
        first_time_title: "Zum ersten Mal hier?",
        first_time_text: "Keine Sorge - wir sind eine freundliche Gemeinschaft und heißen Neuankömmlinge herzlich willkommen. Sie können sich einfach entspannt zurücklehnen und den Gottesdienst genießen.",
        form_title: "Kontaktformular",
        form_name: "Name",
        form_name_placeholder: "Ihr Name",
        form_email: "E-Mail",
        form_email_placeholder: "ihre.email@beispiel.de",
        form_message: "Nachricht",
        form_message_placeholder: "Wie können wir Ihnen helfen?",
        form_submit: "Nachricht senden",
        form_success: "Vielen Dank! Wir werden uns bald bei Ihnen melden.",
        form_required: "Dieses Feld ist erforderlich",
        form_email_invalid: "Bitte geben Sie eine gültige E-Mail-Adresse ein",
    },
    footer: FooterStrings {
        tagline: "Eine internationale christliche Gemeinschaft in Nansenstraße 10 79539 Lörrach",
        quick_links: "Schnelllinks",
        service_times: "Gottesdienstzeiten",
        sunday: "Sonntags: 12:00 - 13:30 Uhr",
        wednesday: "Mittwochs (Gebet): 21:00 - 22:00 Uhr",
        copyright: "© 2025 Christliche Gemeinde International e.V. Alle Rechte vorbehalten.",
    },
};

static EN: Strings = Strings {
    header: HeaderStrings {
        brand_line1: "Christliche Gemeinde",
        brand_line2: "International e.V.",
        home: "Home",
        about: "About Us",
        church_life: "Church Life",
        contact: "Contact",
    },
    hero: HeroStrings {
        welcome: "Welcome",
        title: "Christliche Gemeinde International e.V.",
        subtitle: "An international Christian community in Nansenstraße 10 79539 Lörrach",
        service_times: "Service Times",
        sunday_service: "Sunday Service",
        sunday_time: "12:00 - 13:30",
        prayer_meeting: "Prayer Hour Wednesday",
        prayer_time: "21:00 - 22:00",
        location: "Nansenstraße 10 79539 Lörrach, Germany",
        join_us: "Plan Your Visit",
        learn_more: "Learn More",
    },
    about: AboutStrings {
        title: "About Us",
        subtitle: "A welcoming international Christian community",
        description: "We are Christliche Gemeinde International e.V., a vibrant and diverse community in Nansenstraße 10 79539 Lörrach. Our church welcomes people from all nations and creates a space where faith, hope, and love are at the center.",
        mission: "Our Mission",
        mission_text: "We want to help people get to know Jesus Christ and build a personal relationship with Him. We value community, mutual support, and growing together in faith.",
        values: "Our Values",
        value_items: [
            ("Community", "We build genuine relationships and support one another."),
            ("International", "We welcome people from all cultures and nations."),
            ("Faith", "We are grounded in the Bible and the teachings of Jesus Christ."),
            ("Hospitality", "Everyone is welcome, no matter where they come from or where they are."),
        ],
    },
    church_life: ChurchLifeStrings {
        title: "Church Life",
        subtitle: "Discover our services and events",
        sunday_service_title: "Sunday Service",
        sunday_service_desc: "Our main worship service",
        sunday_service_time: "Sundays: 12:00 - 13:30",
        sunday_service_details: "Come and experience an inspiring service with worship, prayer, and biblical preaching. Everyone is warmly welcome!",
        prayer_hour_title: "Prayer Hour",
        prayer_hour_desc: "Corporate prayer time",
        prayer_hour_time: "Wednesdays: 21:00 - 22:00",
        prayer_hour_details: "Join us for corporate prayer. A time of worship, intercession, and communion with God.",
        prayer_link_label: "Join online now",
        prayer_link_url: "https://join.freeconferencecall.com/mgwangwa",
        what_to_expect: "What to Expect",
        expect_items: [
            ("Warm Welcome", "Friendly atmosphere and open hearts"),
            ("International Community", "People from various cultures"),
            ("Biblical Teaching", "Practical and relevant sermons"),
            ("Praise & Worship", "Contemporary and traditional music"),
        ],
    },
    contact: ContactStrings {
        title: "Contact & Location",
        subtitle: "We look forward to meeting you",
        address_title: "Address",
        address: "Nansenstraße 10 79539 Lörrach, Germany",
        times_title: "Service Times",
        sunday: "Sundays: 12:00 - 13:30",
        wednesday: "Wednesdays (Prayer): 21:00 - 22:00",
        visit_title: "Visit Us",
        visit_text: "Just come by! We look forward to welcoming you.",
        first_time_title: "First Time?",
        first_time_text: "Don't worry - we're a friendly community and warmly welcome newcomers. You can simply relax and enjoy the service.",
        form_title: "Contact Form",
        form_name: "Name",
        form_name_placeholder: "Your name",
        form_email: "Email",
        form_email_placeholder: "your.email@example.com",
        form_message: "Message",
        form_message_placeholder: "How can we help you?",
        form_submit: "Send Message",
        form_success: "Thank you! We will get back to you soon.",
        form_required: "This field is required",
        form_email_invalid: "Please enter a valid email address",
    },
    footer: FooterStrings {
        tagline: "An international Christian community in Nansenstraße 10 79539 Lörrach",
        quick_links: "Quick Links",
        service_times: "Service Times",
        sunday: "Sundays: 12:00 - 13:30",
        wednesday: "Wednesdays (Prayer): 21:00 - 22:00",
        copyright: "© 2025 Christliche Gemeinde International e.V. All rights reserved.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_parsing_falls_back_to_german() {
        assert_eq!(Language::from_preference(Some("en")), Language::En);
        assert_eq!(Language::from_preference(Some("de")), Language::De);
        assert_eq!(Language::from_preference(Some("fr")), Language::De);
        assert_eq!(Language::from_preference(None), Language::De);
    }

    #[test]
    fn test_nav_labels_per_language() {
        let de = Language::De.strings();
        let en = Language::En.strings();

        assert_eq!(de.header.label_for("about"), Some("Über uns"));
        assert_eq!(en.header.label_for("about"), Some("About Us"));
        assert_eq!(de.header.label_for("church-life"), Some("Church Life"));
        assert_eq!(en.header.label_for("unknown"), None);
    }

    #[test]
    fn test_tables_cover_every_section() {
        for language in [Language::De, Language::En] {
            let strings = language.strings();
            for id in ["home", "about", "church-life", "contact"] {
                assert!(strings.header.label_for(id).is_some(), "{id} missing");
            }
            assert!(!strings.contact.form_success.is_empty());
            assert_eq!(strings.about.value_items.len(), 4);
        }
    }
}
