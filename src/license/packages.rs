/// Built-in license identifier for a package. `name` must already be lowercase.
pub fn lookup(name: &str) -> Option<&'static str> {
    let license = match name {
        "react" | "react-dom" | "vue" | "next" | "express" | "lodash" | "axios" | "webpack"
        | "vite" | "tailwindcss" | "jest" | "mocha" | "eslint" | "prettier" | "moment"
        | "jquery" | "bootstrap" | "chart.js" | "socket.io" | "ws" | "pm2" | "nodemon"
        | "chalk" | "commander" | "ora" | "koa" | "fastify" | "graphql" | "apollo-server"
        | "passport" | "bcrypt" | "jsonwebtoken" | "cors" | "helmet" | "dotenv" | "winston"
        | "pino" => "MIT",

        "typescript" | "prisma" | "mongoose" => "Apache-2.0",

        "d3" => "ISC",

        _ => return None,
    };
    Some(license)
}
