//! Static page content.

use serde::{Deserialize, Serialize};

use crate::cart::PromoEngine;
use crate::config::StoreInfo;
use crate::content::Section;

/// What the main area shows for a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionContent {
    /// Hero banner followed by the product grid.
    Catalog(Hero),
    /// A titled static page.
    Page(StaticPage),
}

impl SectionContent {
    pub fn title(&self) -> &str {
        match self {
            SectionContent::Catalog(hero) => &hero.headline,
            SectionContent::Page(page) => &page.title,
        }
    }
}

/// Home page banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub tagline: String,
    pub call_to_action: String,
    /// Heading above the product grid.
    pub catalog_heading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPage {
    pub title: String,
    pub blocks: Vec<ContentBlock>,
}

/// One building block of a static page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Paragraph {
        text: String,
    },
    Card {
        icon: Option<String>,
        title: String,
        body: String,
    },
    /// Icon plus a single line, used for contact details.
    IconLine {
        icon: String,
        text: String,
    },
}

impl ContentBlock {
    fn paragraph(text: &str) -> Self {
        ContentBlock::Paragraph {
            text: text.to_string(),
        }
    }

    fn card(icon: Option<&str>, title: &str, body: &str) -> Self {
        ContentBlock::Card {
            icon: icon.map(str::to_string),
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    fn icon_line(icon: &str, text: &str) -> Self {
        ContentBlock::IconLine {
            icon: icon.to_string(),
            text: text.to_string(),
        }
    }
}

impl Section {
    /// Content rendered for this section. Contact details come from the
    /// store configuration; everything else is fixed copy.
    pub fn content(&self, store: &StoreInfo) -> SectionContent {
        match self {
            Section::Home => SectionContent::Catalog(Hero {
                headline: "Интернет-магазин электроники".to_string(),
                tagline: "Качественные товары с доставкой по всей России".to_string(),
                call_to_action: "Смотреть каталог".to_string(),
                catalog_heading: "Каталог товаров".to_string(),
            }),
            Section::About => page(
                "О нас",
                vec![
                    ContentBlock::paragraph(
                        "Мы — современный интернет-магазин электроники и аксессуаров с \
                         многолетним опытом работы на рынке. Наша миссия — предоставлять \
                         клиентам качественную продукцию по справедливым ценам.",
                    ),
                    ContentBlock::paragraph(
                        "Мы тщательно отбираем товары от проверенных производителей и \
                         гарантируем подлинность каждого продукта. Наша команда \
                         профессионалов всегда готова помочь с выбором и ответить на ваши \
                         вопросы.",
                    ),
                ],
            ),
            Section::Delivery => page(
                "Доставка",
                vec![
                    ContentBlock::card(
                        Some("Truck"),
                        "Курьерская доставка",
                        "Доставка по Москве — от 300 руб. Срок доставки: 1-2 дня.",
                    ),
                    ContentBlock::card(
                        Some("Package"),
                        "Пункты выдачи",
                        "Самовывоз из пунктов выдачи по всей России — бесплатно. Срок: 3-5 дней.",
                    ),
                ],
            ),
            Section::Contacts => page(
                "Контакты",
                vec![
                    ContentBlock::icon_line("Phone", &store.phone),
                    ContentBlock::icon_line("Mail", &store.email),
                    ContentBlock::icon_line("MapPin", &store.address),
                ],
            ),
            Section::Blog => page(
                "Блог",
                vec![
                    ContentBlock::card(
                        None,
                        "Как выбрать ноутбук для работы",
                        "Подробное руководство по выбору ноутбука для профессиональной \
                         деятельности...",
                    ),
                    ContentBlock::card(
                        None,
                        "Топ-5 наушников 2024 года",
                        "Обзор лучших беспроводных наушников текущего года...",
                    ),
                ],
            ),
        }
    }
}

fn page(title: &str, blocks: Vec<ContentBlock>) -> SectionContent {
    SectionContent::Page(StaticPage {
        title: title.to_string(),
        blocks,
    })
}

/// Footer shown under every section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub about: String,
    pub phone: String,
    pub email: String,
    /// One label per promo code, e.g. "SAVE15 (-15%)".
    pub promo_labels: Vec<String>,
    pub copyright: String,
}

impl Footer {
    pub fn build(store: &StoreInfo, promos: &PromoEngine) -> Self {
        Self {
            about: format!("Надежный партнер в мире электроники с {} года", store.since),
            phone: store.phone.clone(),
            email: store.email.clone(),
            promo_labels: promos.codes().iter().map(|c| c.label()).collect(),
            copyright: format!(
                "© {} {}. Все права защищены.",
                store.copyright_year, store.name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_content() {
        let store = StoreInfo::default();
        for section in Section::ALL {
            let content = section.content(&store);
            assert!(!content.title().is_empty());
        }
    }

    #[test]
    fn test_home_is_catalog() {
        let content = Section::Home.content(&StoreInfo::default());
        assert!(matches!(content, SectionContent::Catalog(_)));
        assert_eq!(content.title(), "Интернет-магазин электроники");
    }

    #[test]
    fn test_contacts_use_store_info() {
        let store = StoreInfo {
            phone: "+7 (800) 000-00-00".to_string(),
            ..StoreInfo::default()
        };

        let SectionContent::Page(page) = Section::Contacts.content(&store) else {
            panic!("contacts should be a static page");
        };
        assert_eq!(page.title, "Контакты");
        assert_eq!(
            page.blocks[0],
            ContentBlock::IconLine {
                icon: "Phone".to_string(),
                text: "+7 (800) 000-00-00".to_string(),
            }
        );
        assert_eq!(page.blocks.len(), 3);
    }

    #[test]
    fn test_delivery_cards() {
        let SectionContent::Page(page) = Section::Delivery.content(&StoreInfo::default()) else {
            panic!("delivery should be a static page");
        };
        assert_eq!(page.blocks.len(), 2);
        assert!(matches!(
            &page.blocks[0],
            ContentBlock::Card { title, .. } if title == "Курьерская доставка"
        ));
    }

    #[test]
    fn test_content_serializes_tagged() {
        let json = serde_json::to_value(Section::About.content(&StoreInfo::default())).unwrap();
        assert_eq!(json["type"], "page");
        assert_eq!(json["title"], "О нас");
        assert_eq!(json["blocks"][0]["type"], "paragraph");
    }

    #[test]
    fn test_footer() {
        let footer = Footer::build(&StoreInfo::default(), &PromoEngine::builtin());
        assert_eq!(footer.about, "Надежный партнер в мире электроники с 2020 года");
        assert_eq!(
            footer.promo_labels,
            vec!["WELCOME10 (-10%)", "SUMMER20 (-20%)", "SAVE15 (-15%)"]
        );
        assert_eq!(footer.copyright, "© 2024 TechStore. Все права защищены.");
    }
}
