//! Fixture schema for end-to-end seeding tests, parents first.

pub const AIRPORT_SCHEMA: &[&str] = &[
    "CREATE TABLE users (
        id INT AUTO_INCREMENT PRIMARY KEY,
        email VARCHAR(255) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL,
        name VARCHAR(255) NOT NULL,
        role VARCHAR(20) NOT NULL DEFAULT 'user'
    )",
    "CREATE TABLE airport (
        airport_name VARCHAR(100) PRIMARY KEY,
        city VARCHAR(100),
        state VARCHAR(100),
        country VARCHAR(100)
    )",
    "CREATE TABLE airlines (
        airline_id INT PRIMARY KEY,
        airline_name VARCHAR(100) NOT NULL,
        airport_name VARCHAR(100),
        FOREIGN KEY (airport_name) REFERENCES airport(airport_name)
    )",
    "CREATE TABLE bus (
        airport_name VARCHAR(100),
        number_plate BIGINT PRIMARY KEY,
        status VARCHAR(20),
        destination VARCHAR(100),
        start_time TIME,
        FOREIGN KEY (airport_name) REFERENCES airport(airport_name)
    )",
    "CREATE TABLE commuters (
        passenger_no BIGINT PRIMARY KEY,
        passport_no BIGINT NOT NULL UNIQUE,
        fname VARCHAR(50),
        mname VARCHAR(50),
        lname VARCHAR(50),
        age INT,
        airport_name VARCHAR(100),
        user_id INT,
        FOREIGN KEY (airport_name) REFERENCES airport(airport_name),
        FOREIGN KEY (user_id) REFERENCES users(id)
    )",
    "CREATE TABLE commuter_phone (
        passenger_no BIGINT,
        phone_no BIGINT,
        PRIMARY KEY (passenger_no, phone_no),
        FOREIGN KEY (passenger_no) REFERENCES commuters(passenger_no)
    )",
    "CREATE TABLE flights (
        flight_id BIGINT PRIMARY KEY,
        airline_id INT,
        status VARCHAR(20),
        source VARCHAR(100),
        destination VARCHAR(100),
        arrival TIME,
        departure TIME,
        available_seats INT,
        price INT,
        date DATE,
        runway_no INT,
        stops INT,
        FOREIGN KEY (airline_id) REFERENCES airlines(airline_id),
        FOREIGN KEY (source) REFERENCES airport(airport_name),
        FOREIGN KEY (destination) REFERENCES airport(airport_name)
    )",
    "CREATE TABLE staff (
        id BIGINT PRIMARY KEY,
        airport_name VARCHAR(100),
        salary INT,
        domain VARCHAR(50),
        age INT,
        gender CHAR(1),
        fname VARCHAR(50),
        mname VARCHAR(50),
        lname VARCHAR(50),
        FOREIGN KEY (airport_name) REFERENCES airport(airport_name)
    )",
    "CREATE TABLE staff_phone (
        id BIGINT,
        phone BIGINT,
        PRIMARY KEY (id, phone),
        FOREIGN KEY (id) REFERENCES staff(id)
    )",
    "CREATE TABLE stalls (
        airport_name VARCHAR(100),
        stall_id INT PRIMARY KEY,
        name VARCHAR(100),
        owner_name VARCHAR(100),
        FOREIGN KEY (airport_name) REFERENCES airport(airport_name)
    )",
    "CREATE TABLE ticket (
        ticket_id INT AUTO_INCREMENT PRIMARY KEY,
        passenger_no BIGINT,
        class VARCHAR(20),
        food_preference VARCHAR(20),
        source VARCHAR(100),
        destination VARCHAR(100),
        seat_no INT,
        flight_id BIGINT,
        user_id INT,
        transaction_id VARCHAR(36),
        payment_status VARCHAR(20),
        amount_paid DECIMAL(10, 2),
        UNIQUE (flight_id, seat_no),
        FOREIGN KEY (passenger_no) REFERENCES commuters(passenger_no),
        FOREIGN KEY (flight_id) REFERENCES flights(flight_id),
        FOREIGN KEY (user_id) REFERENCES users(id)
    )",
    "CREATE TRIGGER decrease_seats AFTER INSERT ON ticket
        FOR EACH ROW
        UPDATE flights SET available_seats = available_seats - 1
        WHERE flight_id = NEW.flight_id",
    "CREATE TABLE loyalty_points (
        user_id INT PRIMARY KEY,
        points INT NOT NULL,
        tier VARCHAR(20) NOT NULL,
        FOREIGN KEY (user_id) REFERENCES users(id)
    )",
    "CREATE TABLE point_transactions (
        id INT AUTO_INCREMENT PRIMARY KEY,
        user_id INT,
        ticket_id INT NULL,
        points_earned INT,
        points_redeemed INT,
        FOREIGN KEY (user_id) REFERENCES users(id),
        FOREIGN KEY (ticket_id) REFERENCES ticket(ticket_id)
    )",
    "CREATE TABLE waitlist (
        id INT AUTO_INCREMENT PRIMARY KEY,
        user_id INT,
        flight_id BIGINT,
        class VARCHAR(20),
        status VARCHAR(20),
        FOREIGN KEY (user_id) REFERENCES users(id),
        FOREIGN KEY (flight_id) REFERENCES flights(flight_id)
    )",
];
