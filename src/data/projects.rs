use crate::models::{Category, LocalizedText, Project};

struct Seed {
    id: u32,
    title: &'static str,
    category: Category,
    image: &'static str,
    featured: bool,
    year: u16,
    pt: &'static str,
    es: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: 1,
        title: "Casa Jardins",
        category: Category::Residential,
        image: "/images/projects/casa-jardins.jpg",
        featured: true,
        year: 2023,
        pt: "Marcenaria integrada em freijó para uma residência de três andares.",
        es: "Carpintería integrada en freijó para una residencia de tres plantas.",
    },
    Seed {
        id: 2,
        title: "Escritório Atlântico",
        category: Category::Corporate,
        image: "/images/projects/escritorio-atlantico.jpg",
        featured: true,
        year: 2022,
        pt: "Estações de trabalho e salas de reunião sob medida para 120 pessoas.",
        es: "Estaciones de trabajo y salas de reuniones a medida para 120 personas.",
    },
    Seed {
        id: 3,
        title: "Hotel Maré",
        category: Category::Hospitality,
        image: "/images/projects/hotel-mare.jpg",
        featured: true,
        year: 2024,
        pt: "Mobiliário de 48 suítes com cabeceiras em palhinha natural.",
        es: "Mobiliario de 48 suites con cabeceros de rejilla natural.",
    },
    Seed {
        id: 4,
        title: "Apartamento Vila Madalena",
        category: Category::Residential,
        image: "/images/projects/vila-madalena.jpg",
        featured: false,
        year: 2021,
        pt: "Cozinha e living com painéis ripados em carvalho.",
        es: "Cocina y salón con paneles listonados de roble.",
    },
    Seed {
        id: 5,
        title: "Loja Terra",
        category: Category::Retail,
        image: "/images/projects/loja-terra.jpg",
        featured: false,
        year: 2023,
        pt: "Expositores modulares para uma rede de lojas de cerâmica.",
        es: "Expositores modulares para una cadena de tiendas de cerámica.",
    },
    Seed {
        id: 6,
        title: "Coworking Farol",
        category: Category::Corporate,
        image: "/images/projects/coworking-farol.jpg",
        featured: false,
        year: 2020,
        pt: "Mesas compartilhadas e cabines acústicas em compensado naval.",
        es: "Mesas compartidas y cabinas acústicas en contrachapado marino.",
    },
    Seed {
        id: 7,
        title: "Pousada Serra",
        category: Category::Hospitality,
        image: "/images/projects/pousada-serra.jpg",
        featured: false,
        year: 2022,
        pt: "Recepção, restaurante e quartos em madeira de demolição.",
        es: "Recepción, restaurante y habitaciones en madera recuperada.",
    },
    Seed {
        id: 8,
        title: "Casa Lago",
        category: Category::Residential,
        image: "/images/projects/casa-lago.jpg",
        featured: true,
        year: 2024,
        pt: "Biblioteca de pé-direito duplo com escada corrediça.",
        es: "Biblioteca de doble altura con escalera corredera.",
    },
];

/// The portfolio, in display order
pub fn projects() -> Vec<Project> {
    SEEDS
        .iter()
        .map(|s| Project {
            id: s.id,
            title: s.title.to_string(),
            category: s.category,
            image: s.image.to_string(),
            featured: s.featured,
            year: s.year,
            description: LocalizedText::new(s.pt, s.es),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let list = projects();
        let ids: HashSet<u32> = list.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn every_category_is_represented() {
        let list = projects();
        for category in Category::all() {
            assert!(list.iter().any(|p| p.category == category), "{category:?}");
        }
    }
}
