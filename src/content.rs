#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
}

impl Project {
    pub fn find(id: u32) -> Option<&'static Project> {
        PROJECTS.iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// devicon class
    pub icon: &'static str,
}

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub years_experience: u32,
    pub email: &'static str,
    pub location: &'static str,
    pub github_url: &'static str,
    pub github_handle: &'static str,
    pub telegram_url: &'static str,
    pub avatar: &'static str,
    pub workspace_image: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Александр",
    role: "Frontend-разработчик",
    tagline: "Создаю современные веб-приложения с акцентом на производительность и пользовательский опыт",
    about: &[
        "Я frontend-разработчик с 3-летним опытом создания современных веб-приложений. Специализируюсь на React-экосистеме и уделяю особое внимание деталям интерфейса и производительности.",
        "Люблю чистый код, доступные интерфейсы и решение сложных задач простыми способами. Постоянно изучаю новые технологии и делюсь знаниями с комьюнити.",
    ],
    years_experience: 3,
    email: "hello@example.com",
    location: "Москва, Россия",
    github_url: "https://github.com",
    github_handle: "@username",
    telegram_url: "https://telegram.org",
    avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&q=80",
    workspace_image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&q=80",
};

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Интернет-магазин",
        description: "Современный e-commerce проект с корзиной и оплатой",
        tech: &["React", "Node.js", "MongoDB"],
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&q=80",
        link: "#",
    },
    Project {
        id: 2,
        title: "Корпоративный сайт",
        description: "Лендинг для IT-компании с анимациями",
        tech: &["React", "Tailwind", "Framer Motion"],
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&q=80",
        link: "#",
    },
    Project {
        id: 3,
        title: "Приложение доставки",
        description: "Мобильное PWA для службы доставки еды",
        tech: &["React", "PWA", "Firebase"],
        image: "https://images.unsplash.com/photo-1526304640581-d334cdbbf45e?w=800&q=80",
        link: "#",
    },
    Project {
        id: 4,
        title: "Блог-платформа",
        description: "CMS для ведения блога с Markdown",
        tech: &["Next.js", "Prisma", "PostgreSQL"],
        image: "https://images.unsplash.com/photo-1499750310107-5fef28a66643?w=800&q=80",
        link: "#",
    },
];

pub static SKILLS: [Skill; 6] = [
    Skill {
        name: "React",
        icon: "devicon-react-original",
    },
    Skill {
        name: "JavaScript",
        icon: "devicon-javascript-plain",
    },
    Skill {
        name: "TypeScript",
        icon: "devicon-typescript-plain",
    },
    Skill {
        name: "Node.js",
        icon: "devicon-nodejs-plain",
    },
    Skill {
        name: "Tailwind",
        icon: "devicon-tailwindcss-original",
    },
    Skill {
        name: "Git",
        icon: "devicon-git-plain",
    },
];
