//! Initial directory content loaded at startup.

use crate::models::{CategoryConfig, Spot};

#[allow(clippy::too_many_arguments)]
fn spot(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    address: &str,
    neighborhood: &str,
    image_seed: &str,
    rating: f64,
    link: &str,
) -> Spot {
    Spot {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        address: Some(address.to_string()),
        images: vec![format!("https://picsum.photos/seed/{}/800/600", image_seed)],
        rating,
        neighborhood: neighborhood.to_string(),
        link: Some(link.to_string()),
    }
}

pub fn featured_spots() -> Vec<Spot> {
    vec![
        spot(
            "1",
            "Bar do Mineiro",
            "A feijoada mais famosa de Santa Teresa em um ambiente histórico e boêmio.",
            "Bares",
            "Rua Paschoal Carlos Magno, 99",
            "Santa Teresa",
            "mineiro",
            4.8,
            "https://goo.gl/maps/abc",
        ),
        spot(
            "2",
            "Aprazível",
            "Culinária brasileira refinada com uma vista deslumbrante da Baía de Guanabara.",
            "Restaurantes",
            "Rua Aprazível, 62",
            "Santa Teresa",
            "aprazivel",
            4.9,
            "https://goo.gl/maps/def",
        ),
        spot(
            "3",
            "Mureta da Urca",
            "O melhor pôr do sol da cidade acompanhado de um casco gelado e pastéis.",
            "Passeios",
            "Rua Cândido Gaffrée",
            "Urca",
            "urca",
            4.7,
            "https://goo.gl/maps/ghi",
        ),
        spot(
            "4",
            "Canastra Bar",
            "Vinhos brasileiros e queijos artesanais no coração de Ipanema.",
            "Bares",
            "Rua Jangadeiros, 42",
            "Ipanema",
            "canastra",
            4.6,
            "https://goo.gl/maps/jkl",
        ),
    ]
}

pub fn initial_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new("Restaurantes", "🍽️", "#ffedd5"),
        CategoryConfig::new("Bares", "🍺", "#fef9c3"),
        CategoryConfig::new("Passeios", "📸", "#dbeafe"),
        CategoryConfig::new("Praias", "🏖️", "#ccfbf1"),
        CategoryConfig::new("Vida Noturna", "💃", "#f3e8ff"),
    ]
}

pub fn initial_neighborhoods() -> Vec<String> {
    [
        "Ipanema",
        "Leblon",
        "Santa Teresa",
        "Urca",
        "Copacabana",
        "Botafogo",
        "Lapa",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
